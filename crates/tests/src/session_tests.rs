use crate::common::{admin_user, spawn_service};
use pretty_assertions::assert_eq;
use shared_types::UserRole;

#[tokio::test]
async fn current_user_returns_the_session_identity() {
    let (client, state) = spawn_service(Vec::new()).await;
    *state.current_user.lock().unwrap() = Some(admin_user());

    let user = client.get_current_user().await.unwrap();

    assert_eq!(user.email, "admin@clickprop.test");
    assert_eq!(user.role(), UserRole::Admin);
    assert!(user.is_admin());
}

#[tokio::test]
async fn missing_session_is_unauthorized() {
    let (client, _state) = spawn_service(Vec::new()).await;

    let err = client.get_current_user().await.unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn non_admin_session_does_not_satisfy_the_admin_gate() {
    let (client, state) = spawn_service(Vec::new()).await;
    let mut user = admin_user();
    user.role = "user".to_string();
    *state.current_user.lock().unwrap() = Some(user);

    let fetched = client.get_current_user().await.unwrap();

    assert!(!fetched.is_admin());
    assert_eq!(fetched.role(), UserRole::User);
}

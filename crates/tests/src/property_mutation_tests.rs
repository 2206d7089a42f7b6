use crate::common::{property, spawn_service};
use pretty_assertions::assert_eq;
use shared_types::{ListingStatus, PropertyFilter, PropertyType, ServiceErrorKind};

fn seed() -> Vec<shared_types::Property> {
    vec![
        property(
            "p1",
            "Sunny 2BHK",
            "Mumbai",
            PropertyType::Flat,
            ListingStatus::Rent,
            25_000.0,
        ),
        property(
            "p2",
            "Lakeview Villa",
            "Pune",
            PropertyType::Villa,
            ListingStatus::Sale,
            9_500_000.0,
        ),
    ]
}

#[tokio::test]
async fn delete_removes_the_property() {
    let (client, _state) = spawn_service(seed()).await;

    client.delete_property("p1").await.unwrap();

    let remaining = client.list_properties(&PropertyFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "p2");
}

#[tokio::test]
async fn deleting_an_unknown_id_is_not_found() {
    let (client, state) = spawn_service(seed()).await;

    let err = client.delete_property("ghost").await.unwrap_err();

    assert_eq!(err.kind, ServiceErrorKind::NotFound);
    // Nothing was removed as a side effect.
    assert_eq!(state.properties.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn deleting_twice_is_not_idempotent() {
    let (client, _state) = spawn_service(seed()).await;

    client.delete_property("p2").await.unwrap();
    let err = client.delete_property("p2").await.unwrap_err();

    assert_eq!(err.kind, ServiceErrorKind::NotFound);
}

#[tokio::test]
async fn notify_reports_how_many_users_were_notified() {
    let (client, state) = spawn_service(seed()).await;

    let ids = vec!["p1".to_string(), "p2".to_string()];
    let resp = client.notify_users(&ids).await.unwrap();

    assert_eq!(resp.count(), 5);
    let requests = state.notify_requests.lock().unwrap();
    assert_eq!(requests.as_slice(), &[ids]);
}

#[tokio::test]
async fn notify_with_no_selection_never_reaches_the_service() {
    let (client, state) = spawn_service(seed()).await;

    let err = client.notify_users(&[]).await.unwrap_err();

    assert_eq!(err.kind, ServiceErrorKind::BadRequest);
    assert!(state.notify_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn get_property_returns_the_full_record() {
    let (client, _state) = spawn_service(seed()).await;

    let p = client.get_property("p2").await.unwrap();

    assert_eq!(p.title, "Lakeview Villa");
    assert_eq!(p.property_type, PropertyType::Villa);
}

#[tokio::test]
async fn get_unknown_property_is_not_found() {
    let (client, _state) = spawn_service(seed()).await;

    let err = client.get_property("ghost").await.unwrap_err();

    assert_eq!(err.kind, ServiceErrorKind::NotFound);
}

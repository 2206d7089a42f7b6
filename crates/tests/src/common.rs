use api_client::PropertyServiceClient;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde_json::json;
use shared_types::{
    ListingStatus, NotifyUsersRequest, Property, PropertyLocation, PropertyType, SessionUser,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the external property service, plus a record of
/// everything the client actually sent — tests assert on the wire traffic,
/// not just on return values.
pub struct ServiceState {
    pub properties: Mutex<Vec<Property>>,
    /// Query param maps received by the list endpoint, in order.
    pub received_queries: Mutex<Vec<HashMap<String, String>>>,
    /// Id lists received by the notify endpoint, in order.
    pub notify_requests: Mutex<Vec<Vec<String>>>,
    /// User ids the notify endpoint reports as notified.
    pub notify_reply: Mutex<Vec<String>>,
    /// Number of upcoming list requests to fail with a 500.
    pub fail_next_list: AtomicUsize,
    pub current_user: Mutex<Option<SessionUser>>,
}

impl ServiceState {
    fn new(seed: Vec<Property>) -> Self {
        Self {
            properties: Mutex::new(seed),
            received_queries: Mutex::new(Vec::new()),
            notify_requests: Mutex::new(Vec::new()),
            notify_reply: Mutex::new(vec![
                "u1".into(),
                "u2".into(),
                "u3".into(),
                "u4".into(),
                "u5".into(),
            ]),
            fail_next_list: AtomicUsize::new(0),
            current_user: Mutex::new(None),
        }
    }

    pub fn list_request_count(&self) -> usize {
        self.received_queries.lock().unwrap().len()
    }
}

/// Bind the mock service on an ephemeral port and return a client pointed at
/// it together with the shared state handle.
pub async fn spawn_service(seed: Vec<Property>) -> (PropertyServiceClient, Arc<ServiceState>) {
    let state = Arc::new(ServiceState::new(seed));

    let app = Router::new()
        .route("/api/properties", get(list_properties))
        .route("/api/properties/notify", post(notify_users))
        .route(
            "/api/properties/{id}",
            get(get_property).delete(delete_property),
        )
        .route("/api/auth/me", get(current_user))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock service died");
    });

    let client = PropertyServiceClient::new(format!("http://{addr}/api"));
    (client, state)
}

/// Property fixture with sensible defaults for the fields tests rarely vary.
pub fn property(
    id: &str,
    title: &str,
    city: &str,
    property_type: PropertyType,
    status: ListingStatus,
    price: f64,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        property_type,
        status,
        price,
        location: PropertyLocation {
            city: city.to_string(),
            state: None,
            address: None,
        },
        images: Vec::new(),
        views: 0,
        created_at: Utc::now() - Duration::days(3),
    }
}

pub fn admin_user() -> SessionUser {
    SessionUser {
        id: "admin1".to_string(),
        name: "Admin".to_string(),
        email: "admin@clickprop.test".to_string(),
        role: "admin".to_string(),
        avatar_url: None,
    }
}

async fn list_properties(
    State(state): State<Arc<ServiceState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.received_queries.lock().unwrap().push(params.clone());

    if state
        .fail_next_list
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "simulated service failure"})),
        );
    }

    let properties = state.properties.lock().unwrap();
    let matches: Vec<&Property> = properties
        .iter()
        .filter(|p| {
            if let Some(location) = params.get("location") {
                let needle = location.to_lowercase();
                if !p.location.city.to_lowercase().contains(&needle)
                    && !p.title.to_lowercase().contains(&needle)
                {
                    return false;
                }
            }
            if let Some(t) = params.get("type") {
                if p.property_type.as_str() != t {
                    return false;
                }
            }
            if let Some(s) = params.get("status") {
                if p.status.as_str() != s {
                    return false;
                }
            }
            true
        })
        .collect();

    (StatusCode::OK, Json(json!({ "data": matches })))
}

async fn get_property(
    State(state): State<Arc<ServiceState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let properties = state.properties.lock().unwrap();
    match properties.iter().find(|p| p.id == id) {
        Some(p) => (StatusCode::OK, Json(json!({ "data": p }))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Property not found"})),
        ),
    }
}

async fn delete_property(
    State(state): State<Arc<ServiceState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut properties = state.properties.lock().unwrap();
    let before = properties.len();
    properties.retain(|p| p.id != id);
    if properties.len() < before {
        (
            StatusCode::OK,
            Json(json!({"data": {"message": "Property deleted"}})),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Property not found"})),
        )
    }
}

async fn notify_users(
    State(state): State<Arc<ServiceState>>,
    Json(body): Json<NotifyUsersRequest>,
) -> impl IntoResponse {
    state
        .notify_requests
        .lock()
        .unwrap()
        .push(body.property_ids.clone());
    let users = state.notify_reply.lock().unwrap().clone();
    (
        StatusCode::OK,
        Json(json!({"data": {"notifiedUsers": users}})),
    )
}

async fn current_user(State(state): State<Arc<ServiceState>>) -> impl IntoResponse {
    let user = state.current_user.lock().unwrap().clone();
    match user {
        Some(u) => (StatusCode::OK, Json(json!({ "data": u }))),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Not authenticated"})),
        ),
    }
}

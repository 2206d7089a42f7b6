use crate::common::{property, spawn_service};
use api_client::QueryCache;
use pretty_assertions::assert_eq;
use shared_types::{ListingStatus, PropertyFilter, PropertyType, ServiceErrorKind};
use std::sync::atomic::Ordering;

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
        property(
            "p3",
            "Andheri Office Space",
            "Mumbai",
            PropertyType::Commercial,
            ListingStatus::Sale,
            15_000_000.0,
        ),
    ]
}

#[tokio::test]
async fn default_filter_sends_no_params() {
    let (client, state) = spawn_service(seed()).await;

    let result = client.list_properties(&PropertyFilter::default()).await.unwrap();

    assert_eq!(result.len(), 3);
    let queries = state.received_queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].is_empty(), "defaults must be omitted, got {:?}", queries[0]);
}

#[tokio::test]
async fn committed_fields_are_sent_and_defaults_omitted() {
    let (client, state) = spawn_service(seed()).await;

    // {text: "Mumbai", type: all, status: rent}
    let filter = PropertyFilter {
        query: Some("Mumbai".to_string()),
        property_type: None,
        status: Some(ListingStatus::Rent),
    };
    let result = client.list_properties(&filter).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "p1");

    let queries = state.received_queries.lock().unwrap();
    let query = &queries[0];
    assert_eq!(query.get("location").map(String::as_str), Some("Mumbai"));
    assert_eq!(query.get("status").map(String::as_str), Some("rent"));
    assert!(!query.contains_key("type"), "type left at default must not be sent");
}

#[tokio::test]
async fn zero_matches_is_an_empty_result_not_an_error() {
    let (client, _state) = spawn_service(seed()).await;

    let filter = PropertyFilter {
        query: Some("Chennai".to_string()),
        ..Default::default()
    };
    let result = client.list_properties(&filter).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn list_retries_once_after_a_server_error() {
    let (client, state) = spawn_service(seed()).await;
    state.fail_next_list.store(1, Ordering::SeqCst);

    let result = client.list_properties(&PropertyFilter::default()).await.unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(state.list_request_count(), 2);
}

#[tokio::test]
async fn list_gives_up_after_exhausting_retries() {
    let (client, state) = spawn_service(seed()).await;
    state.fail_next_list.store(2, Ordering::SeqCst);

    let err = client
        .list_properties(&PropertyFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ServiceErrorKind::ServerError);
    assert_eq!(state.list_request_count(), 2);
}

#[tokio::test]
async fn cached_list_does_not_refetch_within_ttl() {
    let (client, state) = spawn_service(seed()).await;
    let cache = QueryCache::new();
    let filter = PropertyFilter::default();

    let first = client.list_properties_cached(&cache, &filter).await.unwrap();
    let second = client.list_properties_cached(&cache, &filter).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(state.list_request_count(), 1);
}

#[tokio::test]
async fn invalidating_the_prefix_forces_a_refetch() {
    let (client, state) = spawn_service(seed()).await;
    let cache = QueryCache::new();
    let filter = PropertyFilter {
        status: Some(ListingStatus::Sale),
        ..Default::default()
    };

    client.list_properties_cached(&cache, &filter).await.unwrap();
    cache.invalidate_prefix("properties");
    client.list_properties_cached(&cache, &filter).await.unwrap();

    assert_eq!(state.list_request_count(), 2);
}

#[tokio::test]
async fn distinct_filters_use_distinct_cache_entries() {
    let (client, state) = spawn_service(seed()).await;
    let cache = QueryCache::new();

    let rentals = PropertyFilter {
        status: Some(ListingStatus::Rent),
        ..Default::default()
    };
    let villas = PropertyFilter {
        property_type: Some(PropertyType::Villa),
        ..Default::default()
    };

    let rent_result = client.list_properties_cached(&cache, &rentals).await.unwrap();
    let villa_result = client.list_properties_cached(&cache, &villas).await.unwrap();

    assert_eq!(rent_result.len(), 1);
    assert_eq!(villa_result.len(), 1);
    assert_eq!(state.list_request_count(), 2);
    assert_eq!(cache.len(), 2);
}

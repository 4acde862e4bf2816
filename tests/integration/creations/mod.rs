//! Integration tests for the personal creation store

use std::time::Duration;

use chrono::{TimeZone, Utc};

use creatorkit_common::Error;
use creatorkit_creations::{CreationStore, LoadOutcome, StoreState, TypeFilter};
use creatorkit_gateway::mock::MockCredentialProvider;

use crate::common::{
    creation_json, declined, list_body, session_pair, TestBackend, USER_CREATIONS_PATH,
};

fn dashboard_list() -> serde_json::Value {
    list_body(vec![
        creation_json(1, "text", "AI in healthcare", &[], "2025-03-02T10:00:00Z"),
        creation_json(2, "image", "Healthcare robot", &[], "2025-03-10T10:00:00Z"),
        creation_json(3, "image", "Mountain sunrise", &[], "2025-02-27T10:00:00Z"),
    ])
}

#[tokio::test]
async fn test_dashboard_search_filter_and_stats() {
    let backend = TestBackend::start().await;
    backend.serve_list(USER_CREATIONS_PATH, dashboard_list()).await;

    let store = CreationStore::new(backend.gateway());
    let outcome = store.load(&MockCredentialProvider::new()).await.unwrap();
    assert_eq!(outcome, LoadOutcome::Applied { count: 3 });

    let healthcare = store.filtered_view("HEALTHCARE", TypeFilter::All);
    assert_eq!(healthcare.len(), 2);

    let healthcare_images = store.filtered_view("healthcare", "image".parse().unwrap());
    assert_eq!(healthcare_images.len(), 1);
    assert_eq!(healthcare_images[0].prompt, "Healthcare robot");

    let stats = store.stats_at(&Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.this_month, 2);
    assert_eq!(stats.images, 2);

    // Same month number, different year
    let stats = store.stats_at(&Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap());
    assert_eq!(stats.this_month, 0);
}

#[tokio::test]
async fn test_failed_reload_keeps_prior_snapshot() {
    let backend = TestBackend::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(dashboard_list()))
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    backend
        .serve_list(USER_CREATIONS_PATH, declined("Free usage limit reached"))
        .await;

    let store = CreationStore::new(backend.gateway());
    let credentials = MockCredentialProvider::new();
    store.load(&credentials).await.unwrap();
    let before = store.snapshot();

    let err = store.load(&credentials).await.unwrap_err();
    assert!(err.is_soft());

    let after = store.snapshot();
    assert_eq!(after.state, StoreState::Error);
    assert_eq!(after.creations, before.creations);
    assert_eq!(after.loaded_at, before.loaded_at);
    assert_eq!(after.error.as_deref(), Some("Free usage limit reached"));

    // Derived views keep working from the cached list
    assert_eq!(store.filtered_view("", TypeFilter::All).len(), 3);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let backend = TestBackend::start().await;
    let (slow, fast) = session_pair();

    backend
        .serve_list_for_token(
            USER_CREATIONS_PATH,
            "session-slow",
            list_body(vec![creation_json(1, "text", "stale", &[], "2025-03-01T00:00:00Z")]),
            Duration::from_millis(400),
        )
        .await;
    backend
        .serve_list_for_token(
            USER_CREATIONS_PATH,
            "session-fast",
            list_body(vec![
                creation_json(2, "text", "fresh", &[], "2025-03-01T00:00:00Z"),
                creation_json(3, "image", "fresh image", &[], "2025-03-01T00:00:00Z"),
            ]),
            Duration::ZERO,
        )
        .await;

    let store = CreationStore::new(backend.gateway());

    let (first, second) = tokio::join!(store.load(&slow), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        store.load(&fast).await
    });

    assert_eq!(first.unwrap(), LoadOutcome::Superseded);
    assert_eq!(second.unwrap(), LoadOutcome::Applied { count: 2 });

    let snapshot = store.snapshot();
    assert_eq!(snapshot.state, StoreState::Ready);
    let prompts: Vec<_> = snapshot.creations.iter().map(|c| c.prompt.as_str()).collect();
    assert_eq!(prompts, vec!["fresh", "fresh image"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_stale_success_does_not_hide_newer_failure() {
    let backend = TestBackend::start().await;
    let (slow, fast) = session_pair();

    backend
        .serve_list_for_token(
            USER_CREATIONS_PATH,
            "session-slow",
            dashboard_list(),
            Duration::from_millis(400),
        )
        .await;
    backend
        .serve_list_for_token(
            USER_CREATIONS_PATH,
            "session-fast",
            declined("User not found"),
            Duration::ZERO,
        )
        .await;

    let store = CreationStore::new(backend.gateway());

    let (first, second) = tokio::join!(store.load(&slow), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        store.load(&fast).await
    });

    assert_eq!(first.unwrap(), LoadOutcome::Superseded);
    assert!(second.unwrap_err().is_soft());

    let snapshot = store.snapshot();
    assert_eq!(snapshot.state, StoreState::Error);
    assert!(snapshot.creations.is_empty());
    assert_eq!(snapshot.error.as_deref(), Some("User not found"));
}

#[tokio::test]
async fn test_reads_stay_available_while_loading() {
    let backend = TestBackend::start().await;
    let (slow, fast) = session_pair();

    backend
        .serve_list_for_token(USER_CREATIONS_PATH, "session-fast", dashboard_list(), Duration::ZERO)
        .await;
    backend
        .serve_list_for_token(
            USER_CREATIONS_PATH,
            "session-slow",
            list_body(vec![]),
            Duration::from_millis(300),
        )
        .await;

    let store = CreationStore::new(backend.gateway());
    store.load(&fast).await.unwrap();

    let (reload, observed) = tokio::join!(store.load(&slow), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        (store.is_loading(), store.state(), store.creations().len())
    });

    assert_eq!(observed, (true, StoreState::Loading, 3));
    assert_eq!(reload.unwrap(), LoadOutcome::Applied { count: 0 });
    assert_eq!(store.state(), StoreState::Ready);
}

#[tokio::test]
async fn test_expired_session_sends_nothing() {
    let backend = TestBackend::start().await;
    backend.serve_list(USER_CREATIONS_PATH, dashboard_list()).await;

    let store = CreationStore::new(backend.gateway());
    let credentials = MockCredentialProvider::new();
    credentials.fail_with("Session expired");

    let err = store.load(&credentials).await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
    assert_eq!(credentials.fetch_count(), 1);
    assert_eq!(backend.received_count().await, 0);
}

//! Application wiring integration tests
//!
//! Builds the app from configuration and runs CLI commands against a mock backend.

mod common;

use std::collections::HashMap;

use serial_test::serial;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use creatorkit_app::cli::{execute, Command};
use creatorkit_app::App;
use creatorkit_common::{Config, CredentialProviderKind};
use creatorkit_creations::{CreationId, TypeFilter};

use common::{
    content_body, creation_json, list_body, TestBackend, PUBLISHED_CREATIONS_PATH,
    TOGGLE_LIKE_PATH, USER_CREATIONS_PATH,
};

fn config_for(backend: &TestBackend, vars: &[(&str, &str)]) -> Config {
    let mut env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    env.insert("CREATORKIT_API_BASE_URL".to_string(), format!("{}/", backend.server.uri()));
    Config::from_lookup(|key| env.get(key).cloned()).unwrap()
}

#[tokio::test]
async fn test_static_session_token_is_sent() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(USER_CREATIONS_PATH))
        .and(header("authorization", "Bearer sess_live_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(vec![
            creation_json(1, "text", "AI in healthcare", &[], "2025-03-02T10:00:00Z"),
            creation_json(2, "image", "Cat astronaut", &[], "2025-03-03T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let config = config_for(&backend, &[("CREATORKIT_SESSION_TOKEN", "sess_live_123")]);
    assert_eq!(config.credential_provider, CredentialProviderKind::Static);

    let app = App::from_config(&config).unwrap();
    let out = execute(
        &app,
        Command::Creations {
            search: "ai".to_string(),
            kind: TypeFilter::All,
        },
    )
    .await
    .unwrap();

    assert!(out.starts_with("Total creations: 2"));
    assert!(out.contains("AI in healthcare"));
    assert!(!out.contains("Cat astronaut"));
}

#[tokio::test]
async fn test_like_command_reports_new_count() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(TOGGLE_LIKE_PATH))
        .and(body_json(serde_json::json!({"id": 42})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": true, "message": "Creation Liked"})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    backend
        .serve_list(
            PUBLISHED_CREATIONS_PATH,
            list_body(vec![creation_json(
                42,
                "image",
                "Paper cranes",
                &["mock-user", "other"],
                "2025-03-02T10:00:00Z",
            )]),
        )
        .await;

    let config = config_for(&backend, &[("CREATORKIT_CREDENTIAL_PROVIDER", "mock")]);
    let app = App::from_config(&config).unwrap();

    let out = execute(&app, Command::Like { id: CreationId(42) })
        .await
        .unwrap();
    assert_eq!(out, "Creation Liked (2 likes)");
}

#[tokio::test]
async fn test_titles_command_prints_content() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/generate-blog-title"))
        .and(body_json(serde_json::json!({"prompt": "sourdough", "category": "Food"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(content_body("1. The Patient Loaf")),
        )
        .mount(&backend.server)
        .await;

    let config = config_for(&backend, &[("CREATORKIT_CREDENTIAL_PROVIDER", "mock")]);
    let app = App::from_config(&config).unwrap();

    let out = execute(
        &app,
        Command::Titles {
            keyword: "sourdough".to_string(),
            category: "food".parse().unwrap(),
        },
    )
    .await
    .unwrap();
    assert_eq!(out, "1. The Patient Loaf");
}

#[test]
#[serial]
fn test_config_from_env() {
    std::env::set_var("CREATORKIT_API_BASE_URL", "https://api.creatorkit.test///");
    std::env::set_var("CREATORKIT_CREDENTIAL_PROVIDER", "mock");
    std::env::remove_var("CREATORKIT_SESSION_TOKEN");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_base_url, "https://api.creatorkit.test");
    assert!(App::from_config(&config).is_ok());

    std::env::remove_var("CREATORKIT_API_BASE_URL");
    std::env::remove_var("CREATORKIT_CREDENTIAL_PROVIDER");
}

#[test]
#[serial]
fn test_static_provider_requires_token() {
    std::env::set_var("CREATORKIT_API_BASE_URL", "https://api.creatorkit.test");
    std::env::remove_var("CREATORKIT_CREDENTIAL_PROVIDER");
    std::env::remove_var("CREATORKIT_SESSION_TOKEN");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("CREATORKIT_SESSION_TOKEN"));

    std::env::remove_var("CREATORKIT_API_BASE_URL");
}

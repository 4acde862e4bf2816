//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - A mock backend built on `wiremock`
//! - JSON fixtures for creations and response envelopes
//! - Credential providers bound to distinct sessions

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use creatorkit_gateway::mock::MockCredentialProvider;
use creatorkit_gateway::RequestGateway;

pub const USER_CREATIONS_PATH: &str = "/api/user/get-user-creations";
pub const PUBLISHED_CREATIONS_PATH: &str = "/api/user/get-published-creations";
pub const TOGGLE_LIKE_PATH: &str = "/api/user/toggle-like-creation";

/// Mock CreatorKit backend
pub struct TestBackend {
    pub server: MockServer,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn gateway(&self) -> RequestGateway {
        RequestGateway::new(&self.server.uri()).expect("mock server uri is a valid base url")
    }

    /// Serve `body` on a GET endpoint for every request
    pub async fn serve_list(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` on a GET endpoint once, for requests carrying `token`,
    /// after `delay`
    pub async fn serve_list_for_token(
        &self,
        endpoint: &str,
        token: &str,
        body: Value,
        delay: Duration,
    ) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Two providers for different sessions so their requests can be told apart
pub fn session_pair() -> (MockCredentialProvider, MockCredentialProvider) {
    (
        MockCredentialProvider::with_token("session-slow"),
        MockCredentialProvider::with_token("session-fast"),
    )
}

/// A creation as the backend serializes it
pub fn creation_json(id: i64, kind: &str, prompt: &str, likes: &[&str], created_at: &str) -> Value {
    let content = match kind {
        "image" => format!("https://cdn.example.com/{}.png", id),
        _ => format!("# {}\n\nGenerated text.", prompt),
    };
    json!({
        "id": id,
        "type": kind,
        "prompt": prompt,
        "content": content,
        "created_at": created_at,
        "likes": likes,
        "publish": true,
        "creator": {"name": format!("Creator {}", id)}
    })
}

/// A successful list envelope
pub fn list_body(creations: Vec<Value>) -> Value {
    json!({"success": true, "creations": creations})
}

/// A declined envelope
pub fn declined(message: &str) -> Value {
    json!({"success": false, "message": message})
}

/// A successful generation envelope
pub fn content_body(content: &str) -> Value {
    json!({"success": true, "content": content})
}

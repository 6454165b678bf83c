//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use eventhub_api::{AppState, build_app};
use eventhub_core::config::AppConfig;
use eventhub_database::{EventStore, MemoryStore, Stores, UserStore};
use eventhub_entity::event::{Event, NewEvent};

pub const PASSWORD: &str = "password123";

/// Test application backed by a fresh in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to the store behind the router
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(config.clone(), Stores::from_memory(Arc::clone(&store)));

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// POST /signup
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/signup",
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Login and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Sign up and log in a regular user; returns the token
    pub async fn register(&self, email: &str) -> String {
        let response = self.signup("tester", email, PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "Signup failed: {:?}", response.body);
        self.login(email, PASSWORD).await
    }

    /// Sign up, promote, and log in an admin; returns the token
    pub async fn register_admin(&self, email: &str) -> String {
        let token = self.register(email).await;
        let user = self
            .store
            .find_user_by_email(email)
            .await
            .unwrap()
            .expect("admin user missing");
        self.store.set_admin(user.id, true).await.unwrap();
        token
    }

    /// Insert an event directly into the catalog
    pub async fn create_event(&self, title: &str, date: DateTime<Utc>, capacity: i32) -> Event {
        self.store
            .create_event(&NewEvent::new(title, date).with_capacity(capacity))
            .await
            .expect("Failed to create event")
    }

    /// Current state of an event in the store
    pub async fn event(&self, id: &str) -> Event {
        self.store
            .find_event_by_id(id.parse().unwrap())
            .await
            .unwrap()
            .expect("event missing")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

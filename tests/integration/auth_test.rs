//! Integration tests for signup, login, and bearer authentication.

mod helpers;

use http::StatusCode;
use serde_json::json;

use eventhub_auth::jwt::JwtEncoder;
use eventhub_core::config::AuthConfig;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_signup_and_login() {
    let app = TestApp::new();

    let response = app.signup("ada", "ada@example.com", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User registered successfully");

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "ada@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");
    assert!(!response.body["token"].as_str().unwrap().is_empty());
    assert!(response.body["expiresAt"].is_string());
}

#[tokio::test]
async fn test_token_resolves_to_signed_up_user() {
    let app = TestApp::new();
    let token = app.register("grace@example.com").await;

    let response = app.request("GET", "/profile", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "grace@example.com");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = TestApp::new();
    app.register("ada@example.com").await;

    let response = app.signup("other", "ADA@example.com", "different1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");

    // The original credentials are untouched.
    app.login("ada@example.com", PASSWORD).await;
}

#[tokio::test]
async fn test_signup_input_validation() {
    let app = TestApp::new();

    let bad_email = app.signup("ada", "not-an-email", PASSWORD).await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app.signup("ada", "ada@example.com", "abc").await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);

    let missing_field = app
        .request("POST", "/signup", Some(json!({ "email": "ada@example.com" })), None)
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_field.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "nobody@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "User not found");
    assert_eq!(response.body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.register("ada@example.com").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "ada@example.com", "password": "wrongpassword" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid password");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new();

    for path in ["/events", "/events/upcoming", "/profile", "/bookings/my"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(response.body["error"], "No token provided");
        assert_eq!(response.body["code"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_invalid_tokens_rejected() {
    let app = TestApp::new();

    let garbage = app.request("GET", "/events", None, Some("garbage")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "someone-elses-secret".to_string(),
        ..AuthConfig::default()
    })
    .issue(uuid::Uuid::new_v4())
    .unwrap();

    let response = app
        .request("GET", "/events", None, Some(&foreign.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

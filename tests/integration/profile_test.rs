//! Integration tests for the profile endpoints.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_get_profile_with_bookings() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    app.request("POST", "/bookings", Some(json!({ "eventId": event.id, "seats": 2 })), Some(&token))
        .await;

    let response = app.request("GET", "/profile", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let user = &response.body["user"];
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["isAdmin"], false);
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password").is_none());

    let bookings = response.body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["seats"], 2);
    assert_eq!(bookings[0]["event"]["title"], "Recital");
}

#[tokio::test]
async fn test_update_only_provided_fields() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app
        .request(
            "PUT",
            "/profile",
            Some(json!({ "username": "lovelace", "email": "", "password": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Profile updated successfully");
    assert_eq!(response.body["user"]["username"], "lovelace");
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert!(response.body["user"].get("passwordHash").is_none());

    // Password unchanged.
    app.login("ada@example.com", PASSWORD).await;
}

#[tokio::test]
async fn test_password_change_takes_effect() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app
        .request("PUT", "/profile", Some(json!({ "password": "new-secret" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let old = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "ada@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::BAD_REQUEST);

    app.login("ada@example.com", "new-secret").await;
}

#[tokio::test]
async fn test_update_rejects_bad_input() {
    let app = TestApp::new();
    app.register("taken@example.com").await;
    let token = app.register("ada@example.com").await;

    for body in [
        json!({ "email": "taken@example.com" }),
        json!({ "email": "nope" }),
        json!({ "password": "abc" }),
    ] {
        let response = app.request("PUT", "/profile", Some(body.clone()), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }

    let profile = app.request("GET", "/profile", None, Some(&token)).await;
    assert_eq!(profile.body["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_email_change_allows_login_with_new_address() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app
        .request(
            "PUT",
            "/profile",
            Some(json!({ "email": "Lovelace@Example.com" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "lovelace@example.com");

    app.login("lovelace@example.com", PASSWORD).await;
}

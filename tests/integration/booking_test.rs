//! Integration tests for booking and payment.

mod helpers;

use std::sync::Arc;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_capacity_walkthrough() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    let first = app
        .request(
            "POST",
            "/bookings",
            Some(json!({ "eventId": event.id, "seats": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "Booking created. Proceed to payment.");
    assert_eq!(first.body["booking"]["seats"], 3);
    assert_eq!(first.body["booking"]["paid"], false);
    assert_eq!(first.body["booking"]["eventId"], event.id.to_string());
    assert_eq!(app.event(&event.id.to_string()).await.capacity, 2);

    let second = app
        .request(
            "POST",
            "/bookings",
            Some(json!({ "eventId": event.id, "seats": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["code"], "CONFLICT");
    assert_eq!(app.event(&event.id.to_string()).await.capacity, 2);
}

#[tokio::test]
async fn test_seats_default_to_one() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    let response = app
        .request("POST", "/bookings", Some(json!({ "eventId": event.id })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["booking"]["seats"], 1);
    assert_eq!(app.event(&event.id.to_string()).await.capacity, 4);
}

#[tokio::test]
async fn test_booking_rejections() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    let unknown = app
        .request(
            "POST",
            "/bookings",
            Some(json!({ "eventId": uuid::Uuid::new_v4(), "seats": 1 })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request(
            "POST",
            "/bookings",
            Some(json!({ "eventId": "not-an-id", "seats": 1 })),
            Some(&token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);

    let zero = app
        .request(
            "POST",
            "/bookings",
            Some(json!({ "eventId": event.id, "seats": 0 })),
            Some(&token),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.event(&event.id.to_string()).await.capacity, 5);
}

#[tokio::test]
async fn test_my_bookings_only_lists_callers() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com").await;
    let bob = app.register("bob@example.com").await;
    let concert = app.create_event("Concert", Utc::now() + Duration::days(1), 10).await;
    let play = app.create_event("Play", Utc::now() + Duration::days(2), 10).await;

    for (token, event) in [(&ada, &concert), (&bob, &concert), (&ada, &play)] {
        let response = app
            .request("POST", "/bookings", Some(json!({ "eventId": event.id })), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("GET", "/bookings/my", None, Some(&ada)).await;
    assert_eq!(response.status, StatusCode::OK);

    let bookings = response.body.as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    // Newest first.
    assert_eq!(bookings[0]["event"]["title"], "Play");
    assert_eq!(bookings[1]["event"]["title"], "Concert");
}

#[tokio::test]
async fn test_pay_once() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    let created = app
        .request("POST", "/bookings", Some(json!({ "eventId": event.id })), Some(&token))
        .await;
    let booking_id = created.body["booking"]["id"].as_str().unwrap().to_string();
    let pay_path = format!("/bookings/{booking_id}/pay");

    let first = app.request("POST", &pay_path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "Payment successful");
    assert_eq!(first.body["booking"]["paid"], true);
    assert_eq!(first.body["booking"]["event"]["title"], "Recital");

    let second = app.request("POST", &pay_path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["error"], "Already paid");

    let mine = app.request("GET", "/bookings/my", None, Some(&token)).await;
    assert_eq!(mine.body[0]["paid"], true);
}

#[tokio::test]
async fn test_cannot_pay_someone_elses_booking() {
    let app = TestApp::new();
    let owner = app.register("ada@example.com").await;
    let stranger = app.register("eve@example.com").await;
    let event = app.create_event("Recital", Utc::now(), 5).await;

    let created = app
        .request("POST", "/bookings", Some(json!({ "eventId": event.id })), Some(&owner))
        .await;
    let booking_id = created.body["booking"]["id"].as_str().unwrap().to_string();

    let response = app
        .request("POST", &format!("/bookings/{booking_id}/pay"), None, Some(&stranger))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let unknown = app
        .request(
            "POST",
            &format!("/bookings/{}/pay", uuid::Uuid::new_v4()),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let mine = app.request("GET", "/bookings/my", None, Some(&owner)).await;
    assert_eq!(mine.body[0]["paid"], false);
}

#[tokio::test]
async fn test_concurrent_bookings_never_oversell() {
    let app = Arc::new(TestApp::new());
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Tiny venue", Utc::now(), 5).await;
    let event_id = event.id;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let app = Arc::clone(&app);
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            app.request(
                "POST",
                "/bookings",
                Some(json!({ "eventId": event_id, "seats": 1 })),
                Some(&token),
            )
            .await
            .status
        }));
    }

    let mut granted = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            granted += 1;
        }
    }

    assert_eq!(granted, 5);
    assert_eq!(app.event(&event_id.to_string()).await.capacity, 0);
}

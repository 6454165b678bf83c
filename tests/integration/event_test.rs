//! Integration tests for the event catalog.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_all_sorted_by_date() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let now = Utc::now();

    app.create_event("Later", now + Duration::days(10), 50).await;
    app.create_event("Earlier", now - Duration::days(10), 50).await;
    app.create_event("Middle", now + Duration::days(1), 50).await;

    let response = app.request("GET", "/events", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(titles(&response.body), vec!["Earlier", "Middle", "Later"]);
}

#[tokio::test]
async fn test_upcoming_and_live() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let now = Utc::now();

    app.create_event("Past", now - Duration::days(3), 50).await;
    app.create_event("Now", now, 50).await;
    app.create_event("Future", now + Duration::days(3), 50).await;

    let upcoming = app.request("GET", "/events/upcoming", None, Some(&token)).await;
    assert_eq!(upcoming.status, StatusCode::OK);
    assert_eq!(titles(&upcoming.body), vec!["Now", "Future"]);

    let live = app.request("GET", "/events/live", None, Some(&token)).await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(titles(&live.body), vec!["Now"]);
}

#[tokio::test]
async fn test_get_by_id() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    let event = app.create_event("Opera", Utc::now(), 80).await;

    let response = app
        .request("GET", &format!("/events/{}", event.id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Opera");
    assert_eq!(response.body["capacity"], 80);
    assert_eq!(response.body["id"], event.id.to_string());
}

#[tokio::test]
async fn test_unknown_or_malformed_id_is_not_found() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let unknown = app
        .request(
            "GET",
            &format!("/events/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["error"], "Event not found");

    let malformed = app.request("GET", "/events/12345", None, Some(&token)).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_admin_cannot_create_events() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app
        .request(
            "POST",
            "/events",
            Some(json!({ "title": "Gala", "date": "2031-01-01T19:00:00Z" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_admin_creates_event_with_defaults() {
    let app = TestApp::new();
    let token = app.register_admin("admin@example.com").await;

    let response = app
        .request(
            "POST",
            "/events",
            Some(json!({
                "title": "Gala",
                "date": "2031-01-01T19:00:00Z",
                "venue": "Main hall",
                "startTime": "19:00",
                "endTime": "23:00"
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Event created");
    assert_eq!(response.body["event"]["capacity"], 100);
    assert_eq!(response.body["event"]["price"], 0.0);
    assert_eq!(response.body["event"]["startTime"], "19:00");

    let id = response.body["event"]["id"].as_str().unwrap();
    assert_eq!(app.event(id).await.venue, "Main hall");
}

#[tokio::test]
async fn test_admin_event_validation() {
    let app = TestApp::new();
    let token = app.register_admin("admin@example.com").await;

    for body in [
        json!({ "title": "", "date": "2031-01-01T19:00:00Z" }),
        json!({ "title": "Gala", "date": "2031-01-01T19:00:00Z", "capacity": -5 }),
        json!({ "title": "Gala", "date": "2031-01-01T19:00:00Z", "price": -1.0 }),
        json!({ "title": "Gala", "date": "next friday" }),
    ] {
        let response = app.request("POST", "/events", Some(body.clone()), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }
}

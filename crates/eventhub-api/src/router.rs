//! Route definitions for the EventHub HTTP API.
//!
//! Static segments are matched before captures, so `/events/upcoming` and
//! `/events/live` are never routed to `/events/{id}`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with every route and the request-logging middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(booking_routes())
        .merge(profile_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Signup and login (no token required).
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route("/events/upcoming", get(handlers::event::list_upcoming))
        .route("/events/live", get(handlers::event::list_live))
        .route("/events/{id}", get(handlers::event::get_event))
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings/my", get(handlers::booking::my_bookings))
        .route("/bookings/{id}/pay", post(handlers::booking::pay_booking))
}

fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

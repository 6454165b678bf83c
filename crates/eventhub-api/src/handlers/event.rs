//! Event catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use eventhub_entity::event::Event;

use crate::dto::request::CreateEventRequest;
use crate::dto::response::EventCreatedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidJson, parse_id};
use crate::state::AppState;

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_all().await?))
}

/// GET /events/upcoming
pub async fn list_upcoming(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_upcoming().await?))
}

/// GET /events/live
pub async fn list_live(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_live().await?))
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id, "Event")?;
    Ok(Json(state.event_service.get(id).await?))
}

/// POST /events (admin)
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateEventRequest>,
) -> ApiResult<Json<EventCreatedResponse>> {
    let event = state
        .event_service
        .create_event(auth.context(), req.into())
        .await?;

    Ok(Json(EventCreatedResponse {
        message: "Event created".to_string(),
        event,
    }))
}

//! Booking handlers: reserve, history, pay.

use axum::Json;
use axum::extract::{Path, State};

use eventhub_entity::booking::BookingWithEvent;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::{BookingCreatedResponse, PaymentResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidJson, parse_id};
use crate::state::AppState;

/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateBookingRequest>,
) -> ApiResult<Json<BookingCreatedResponse>> {
    let event_id = parse_id(&req.event_id, "Event")?;
    let booking = state
        .booking_service
        .create(auth.context(), event_id, req.seats())
        .await?;

    Ok(Json(BookingCreatedResponse {
        message: "Booking created. Proceed to payment.".to_string(),
        booking,
    }))
}

/// GET /bookings/my
pub async fn my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookingWithEvent>>> {
    Ok(Json(state.booking_service.list_mine(auth.context()).await?))
}

/// POST /bookings/{id}/pay
pub async fn pay_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PaymentResponse>> {
    let booking_id = parse_id(&id, "Booking")?;
    let booking = state.booking_service.pay(auth.context(), booking_id).await?;

    Ok(Json(PaymentResponse {
        message: "Payment successful".to_string(),
        booking,
    }))
}

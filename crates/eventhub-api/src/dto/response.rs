//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_entity::booking::{Booking, BookingWithEvent};
use eventhub_entity::event::Event;
use eventhub_entity::user::User;

/// A bare confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for the `Authorization` header.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Event creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreatedResponse {
    pub message: String,
    pub event: Event,
}

/// Booking creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: Booking,
}

/// Payment response; the booking carries its event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub message: String,
    pub booking: BookingWithEvent,
}

/// Profile update response.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub user: User,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"unavailable"`.
    pub status: String,
    /// Server version.
    pub version: String,
}

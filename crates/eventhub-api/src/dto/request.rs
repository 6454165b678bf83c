//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use eventhub_entity::booking::DEFAULT_SEATS;
use eventhub_service::event::CreateEventInput;
use eventhub_service::user::ProfileUpdate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin event creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub date: DateTime<Utc>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be zero or greater"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Capacity must be zero or greater"))]
    pub capacity: Option<i32>,
}

impl From<CreateEventRequest> for CreateEventInput {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            venue: req.venue,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            price: req.price,
            capacity: req.capacity,
        }
    }
}

/// Booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// The event to book.
    #[validate(length(min = 1, message = "Event ID is required"))]
    pub event_id: String,
    /// Seats to reserve, 1 when absent.
    #[validate(range(min = 1, message = "Seats must be at least 1"))]
    pub seats: Option<i32>,
}

impl CreateBookingRequest {
    /// Requested seats with the default applied.
    pub fn seats(&self) -> i32 {
        self.seats.unwrap_or(DEFAULT_SEATS)
    }
}

/// Profile update body. Every field is optional; empty strings are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

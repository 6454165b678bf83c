//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::event::Event;

/// Seats reserved when a booking request does not say otherwise.
pub const DEFAULT_SEATS: i32 = 1;

/// A reservation of seats by a user against an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The booked event.
    pub event_id: Uuid,
    /// The user who owns the booking.
    pub user_id: Uuid,
    /// Number of seats reserved.
    pub seats: i32,
    /// Whether the (simulated) payment went through.
    pub paid: bool,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
}

/// A booking with its event expanded, as returned by history and payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithEvent {
    /// The booking itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// The event the booking is for.
    pub event: Event,
}

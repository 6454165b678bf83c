//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Seats offered by an event when none is specified.
pub const DEFAULT_CAPACITY: i32 = 100;

/// Ticket price when none is specified.
pub const DEFAULT_PRICE: f64 = 0.0;

/// A bookable event in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Where the event takes place.
    pub venue: String,
    /// Day (and instant) the event is scheduled for.
    pub date: DateTime<Utc>,
    /// Display start time, e.g. `"19:30"`.
    pub start_time: String,
    /// Display end time.
    pub end_time: String,
    /// Price per seat.
    pub price: f64,
    /// Remaining unbooked seats.
    pub capacity: i32,
    /// When the event was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether `seats` can still be booked.
    pub fn can_seat(&self, seats: i32) -> bool {
        self.capacity >= seats
    }
}

/// Data required to add an event to the catalog.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Venue.
    pub venue: String,
    /// Scheduled date.
    pub date: DateTime<Utc>,
    /// Display start time.
    pub start_time: String,
    /// Display end time.
    pub end_time: String,
    /// Price per seat.
    pub price: f64,
    /// Initial capacity.
    pub capacity: i32,
}

impl NewEvent {
    /// A new event with default price and capacity and empty optional text.
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            venue: String::new(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            price: DEFAULT_PRICE,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the initial capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }
}

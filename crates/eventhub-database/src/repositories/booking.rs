//! Booking repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::booking::{Booking, BookingWithEvent};
use eventhub_entity::event::Event;

use crate::store::BookingStore;

const SELECT_BOOKING_WITH_EVENT: &str = "\
    SELECT b.id, b.event_id, b.user_id, b.seats, b.paid, b.created_at, \
           e.title AS event_title, e.description AS event_description, \
           e.venue AS event_venue, e.date AS event_date, \
           e.start_time AS event_start_time, e.end_time AS event_end_time, \
           e.price AS event_price, e.capacity AS event_capacity, \
           e.created_at AS event_created_at \
    FROM bookings b \
    JOIN events e ON e.id = b.event_id";

/// One row of a booking joined with its event.
#[derive(Debug, FromRow)]
struct BookingEventRow {
    id: Uuid,
    event_id: Uuid,
    user_id: Uuid,
    seats: i32,
    paid: bool,
    created_at: DateTime<Utc>,
    event_title: String,
    event_description: String,
    event_venue: String,
    event_date: DateTime<Utc>,
    event_start_time: String,
    event_end_time: String,
    event_price: f64,
    event_capacity: i32,
    event_created_at: DateTime<Utc>,
}

impl From<BookingEventRow> for BookingWithEvent {
    fn from(row: BookingEventRow) -> Self {
        Self {
            booking: Booking {
                id: row.id,
                event_id: row.event_id,
                user_id: row.user_id,
                seats: row.seats,
                paid: row.paid,
                created_at: row.created_at,
            },
            event: Event {
                id: row.event_id,
                title: row.event_title,
                description: row.event_description,
                venue: row.event_venue,
                date: row.event_date,
                start_time: row.event_start_time,
                end_time: row.event_end_time,
                price: row.event_price,
                capacity: row.event_capacity,
                created_at: row.event_created_at,
            },
        }
    }
}

/// PostgreSQL-backed booking ledger.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_owned(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<BookingWithEvent>> {
        let row = sqlx::query_as::<_, BookingEventRow>(&format!(
            "{SELECT_BOOKING_WITH_EVENT} WHERE b.id = $1 AND b.user_id = $2"
        ))
        .bind(booking_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch booking", e))?;

        Ok(row.map(BookingWithEvent::from))
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn create_booking(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        seats: i32,
    ) -> AppResult<Booking> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start booking"))?;

        // Check and decrement in one statement so concurrent bookings cannot oversell.
        let remaining = sqlx::query_scalar::<_, i32>(
            "UPDATE events SET capacity = capacity - $2 \
             WHERE id = $1 AND capacity >= $2 \
             RETURNING capacity",
        )
        .bind(event_id)
        .bind(seats)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to reserve seats"))?;

        let Some(remaining) = remaining else {
            let exists = sqlx::query_scalar::<_, i32>("SELECT capacity FROM events WHERE id = $1")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to fetch event"))?;

            // Dropping `tx` rolls back.
            return Err(match exists {
                None => AppError::not_found("Event not found"),
                Some(_) => AppError::conflict("Not enough seats available"),
            });
        };

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (event_id, user_id, seats, paid) \
             VALUES ($1, $2, $3, FALSE) \
             RETURNING *",
        )
        .bind(event_id)
        .bind(user_id)
        .bind(seats)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to create booking"))?;

        tx.commit().await.map_err(db_error("Failed to commit booking"))?;

        debug!(booking_id = %booking.id, remaining, "Booking persisted");
        Ok(booking)
    }

    async fn list_bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<BookingWithEvent>> {
        let rows = sqlx::query_as::<_, BookingEventRow>(&format!(
            "{SELECT_BOOKING_WITH_EVENT} WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch bookings"))?;

        Ok(rows.into_iter().map(BookingWithEvent::from).collect())
    }

    async fn mark_booking_paid(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<BookingWithEvent> {
        let flipped = sqlx::query_scalar::<_, Uuid>(
            "UPDATE bookings SET paid = TRUE \
             WHERE id = $1 AND user_id = $2 AND paid = FALSE \
             RETURNING id",
        )
        .bind(booking_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to record payment"))?;

        let current = self.find_owned(booking_id, user_id).await?;

        match (flipped, current) {
            (Some(_), Some(booking)) => Ok(booking),
            (None, Some(_)) => Err(AppError::conflict("Already paid")),
            (_, None) => Err(AppError::not_found("Booking not found")),
        }
    }
}

//! Event repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::event::{Event, NewEvent};

use crate::store::EventStore;

/// PostgreSQL-backed event catalog.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create_event(&self, data: &NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, venue, date, start_time, end_time, price, capacity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.venue)
        .bind(data.date)
        .bind(&data.start_time)
        .bind(&data.end_time)
        .bind(data.price)
        .bind(data.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    async fn find_event_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch event", e))
    }

    async fn list_events(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC, created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch events", e))
    }

    async fn list_events_after(&self, after: DateTime<Utc>) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE date > $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(after)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch upcoming events", e)
        })
    }

    async fn list_events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE date >= $1 AND date < $2 ORDER BY date ASC, created_at ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch live events", e))
    }
}

//! Event catalog queries and admin event creation.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::{EventStore, UserStore};
use eventhub_entity::event::{DEFAULT_CAPACITY, DEFAULT_PRICE, Event, NewEvent};

use crate::context::RequestContext;
use crate::event::window::day_window;

/// Fields accepted when adding an event to the catalog.
#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    /// Event title (required).
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Venue.
    pub venue: Option<String>,
    /// Scheduled date.
    pub date: DateTime<Utc>,
    /// Display start time.
    pub start_time: Option<String>,
    /// Display end time.
    pub end_time: Option<String>,
    /// Price per seat, 0 when absent.
    pub price: Option<f64>,
    /// Seats offered, 100 when absent.
    pub capacity: Option<i32>,
}

impl CreateEventInput {
    fn into_new_event(self) -> AppResult<NewEvent> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }

        let price = self.price.unwrap_or(DEFAULT_PRICE);
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("Price must be zero or greater"));
        }

        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);
        if capacity < 0 {
            return Err(AppError::validation("Capacity must be zero or greater"));
        }

        Ok(NewEvent {
            title,
            description: self.description.unwrap_or_default(),
            venue: self.venue.unwrap_or_default(),
            date: self.date,
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            price,
            capacity,
        })
    }
}

/// Read access to the catalog, plus creation for admins.
#[derive(Debug, Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    users: Arc<dyn UserStore>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>, users: Arc<dyn UserStore>) -> Self {
        Self { events, users }
    }

    /// Every event, date ascending.
    pub async fn list_all(&self) -> AppResult<Vec<Event>> {
        self.events.list_events().await
    }

    /// Events dated after the start of the current local day.
    pub async fn list_upcoming(&self) -> AppResult<Vec<Event>> {
        self.list_upcoming_at(&Local::now()).await
    }

    /// Events dated within the current local day.
    pub async fn list_live(&self) -> AppResult<Vec<Event>> {
        self.list_live_at(&Local::now()).await
    }

    /// [`Self::list_upcoming`] relative to an explicit instant.
    pub async fn list_upcoming_at<Tz: chrono::TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> AppResult<Vec<Event>> {
        let (start_of_today, _) = day_window(now)?;
        self.events.list_events_after(start_of_today).await
    }

    /// [`Self::list_live`] relative to an explicit instant.
    pub async fn list_live_at<Tz: chrono::TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> AppResult<Vec<Event>> {
        let (start, end) = day_window(now)?;
        self.events.list_events_between(start, end).await
    }

    /// A single event.
    pub async fn get(&self, id: Uuid) -> AppResult<Event> {
        self.events
            .find_event_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Add an event. Only admins may do this.
    pub async fn create_event(
        &self,
        ctx: &RequestContext,
        input: CreateEventInput,
    ) -> AppResult<Event> {
        let user = self
            .users
            .find_user_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        if !user.is_admin {
            warn!(user_id = %user.id, "Non-admin attempted to create an event");
            return Err(AppError::authorization("Admin privileges required"));
        }

        self.insert(input).await
    }

    /// Add an event without a caller, for operator tooling.
    pub async fn insert(&self, input: CreateEventInput) -> AppResult<Event> {
        let event = self.events.create_event(&input.into_new_event()?).await?;

        info!(
            event_id = %event.id,
            title = %event.title,
            date = %event.date,
            capacity = event.capacity,
            "Event created"
        );
        Ok(event)
    }
}

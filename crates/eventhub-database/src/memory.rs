//! In-memory store for single-node deployments and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_entity::booking::{Booking, BookingWithEvent};
use eventhub_entity::event::{Event, NewEvent};
use eventhub_entity::user::{NewUser, User, UserChanges};

use crate::store::{BookingStore, EventStore, HealthCheck, UserStore};

/// All tables, guarded together so multi-table writes are atomic.
#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    events: HashMap<Uuid, Event>,
    /// Insertion order.
    bookings: Vec<Booking>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn sorted_events(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.values().filter(|e| keep(e)).cloned().collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        events
    }

    fn expand(&self, booking: &Booking) -> AppResult<BookingWithEvent> {
        let event = self
            .events
            .get(&booking.event_id)
            .cloned()
            .ok_or_else(|| AppError::internal("Booking references a missing event"))?;
        Ok(BookingWithEvent {
            booking: booking.clone(),
            event,
        })
    }
}

/// Process-local implementation of every store trait.
///
/// One `tokio::sync::Mutex` guards all tables, which gives the booking flow
/// the same all-or-nothing behaviour as the PostgreSQL transaction.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, data: &NewUser) -> AppResult<User> {
        let mut tables = self.tables.lock().await;

        if tables.email_taken(&data.email, None) {
            return Err(AppError::validation("Email already registered"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, id: Uuid, changes: &UserChanges) -> AppResult<User> {
        let mut tables = self.tables.lock().await;

        if let Some(email) = &changes.email {
            if tables.email_taken(email, Some(id)) {
                return Err(AppError::validation("Email already registered"));
            }
        }

        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(username) = &changes.username {
            user.username = username.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(hash) = &changes.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn set_admin(&self, id: Uuid, is_admin: bool) -> AppResult<User> {
        let mut tables = self.tables.lock().await;
        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.is_admin = is_admin;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn create_event(&self, data: &NewEvent) -> AppResult<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            venue: data.venue.clone(),
            date: data.date,
            start_time: data.start_time.clone(),
            end_time: data.end_time.clone(),
            price: data.price,
            capacity: data.capacity,
            created_at: Utc::now(),
        };
        self.tables
            .lock()
            .await
            .events
            .insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_event_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.tables.lock().await.events.get(&id).cloned())
    }

    async fn list_events(&self) -> AppResult<Vec<Event>> {
        Ok(self.tables.lock().await.sorted_events(|_| true))
    }

    async fn list_events_after(&self, after: DateTime<Utc>) -> AppResult<Vec<Event>> {
        Ok(self.tables.lock().await.sorted_events(|e| e.date > after))
    }

    async fn list_events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Event>> {
        Ok(self
            .tables
            .lock()
            .await
            .sorted_events(|e| e.date >= start && e.date < end))
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create_booking(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        seats: i32,
    ) -> AppResult<Booking> {
        let mut tables = self.tables.lock().await;

        let event = tables
            .events
            .get_mut(&event_id)
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if !event.can_seat(seats) {
            return Err(AppError::conflict("Not enough seats available"));
        }
        event.capacity -= seats;
        let remaining = event.capacity;

        let booking = Booking {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            seats,
            paid: false,
            created_at: Utc::now(),
        };
        tables.bookings.push(booking.clone());

        debug!(booking_id = %booking.id, remaining, "Booking stored in memory");
        Ok(booking)
    }

    async fn list_bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<BookingWithEvent>> {
        let tables = self.tables.lock().await;
        tables
            .bookings
            .iter()
            .rev()
            .filter(|b| b.user_id == user_id)
            .map(|b| tables.expand(b))
            .collect()
    }

    async fn mark_booking_paid(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<BookingWithEvent> {
        let mut tables = self.tables.lock().await;

        let booking = tables
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id && b.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if booking.paid {
            return Err(AppError::conflict("Already paid"));
        }
        booking.paid = true;
        let booking = booking.clone();

        tables.expand(&booking)
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

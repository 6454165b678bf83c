//! Store traits the service layer is written against.
//!
//! Two implementations exist: the PostgreSQL repositories in
//! [`crate::repositories`] and the single-process [`crate::MemoryStore`].
//! Both must uphold the same contract:
//!
//! - duplicate emails are rejected with `ErrorKind::Validation`;
//! - [`BookingStore::create_booking`] checks and decrements capacity and
//!   inserts the booking as one atomic unit;
//! - [`BookingStore::mark_booking_paid`] flips `paid` at most once and only
//!   for the owning user.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use eventhub_core::config::{DatabaseConfig, StoreProvider};
use eventhub_core::result::AppResult;
use eventhub_entity::booking::{Booking, BookingWithEvent};
use eventhub_entity::event::{Event, NewEvent};
use eventhub_entity::user::{NewUser, User, UserChanges};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{BookingRepository, EventRepository, UserRepository};

/// Persisted user records.
#[async_trait]
pub trait UserStore: Send + Sync + fmt::Debug + 'static {
    /// Insert a new user. Fails with a validation error if the email is taken.
    async fn create_user(&self, data: &NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Apply the provided fields. Fails with not-found for an unknown id and
    /// with a validation error if the new email belongs to someone else.
    async fn update_user(&self, id: Uuid, changes: &UserChanges) -> AppResult<User>;

    /// Grant or revoke catalog administration.
    async fn set_admin(&self, id: Uuid, is_admin: bool) -> AppResult<User>;
}

/// Persisted event catalog.
#[async_trait]
pub trait EventStore: Send + Sync + fmt::Debug + 'static {
    /// Insert a new event.
    async fn create_event(&self, data: &NewEvent) -> AppResult<Event>;

    /// Find an event by primary key.
    async fn find_event_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// All events, date ascending.
    async fn list_events(&self) -> AppResult<Vec<Event>>;

    /// Events dated strictly after `after`, date ascending.
    async fn list_events_after(&self, after: DateTime<Utc>) -> AppResult<Vec<Event>>;

    /// Events dated within `[start, end)`, date ascending.
    async fn list_events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Event>>;
}

/// Persisted booking ledger.
#[async_trait]
pub trait BookingStore: Send + Sync + fmt::Debug + 'static {
    /// Reserve `seats` on an event for a user.
    ///
    /// Fails with not-found if the event does not exist and with a conflict
    /// if fewer than `seats` remain; in both cases nothing is written.
    async fn create_booking(&self, user_id: Uuid, event_id: Uuid, seats: i32)
    -> AppResult<Booking>;

    /// All bookings owned by a user with their events, newest first.
    async fn list_bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<BookingWithEvent>>;

    /// Mark a booking owned by `user_id` as paid.
    ///
    /// Fails with not-found if the booking does not exist or belongs to
    /// someone else, and with a conflict if it is already paid.
    async fn mark_booking_paid(&self, booking_id: Uuid, user_id: Uuid)
    -> AppResult<BookingWithEvent>;
}

/// Backend reachability probe.
#[async_trait]
pub trait HealthCheck: Send + Sync + fmt::Debug + 'static {
    /// Returns `Ok(true)` when the backend answers.
    async fn health_check(&self) -> AppResult<bool>;
}

/// The full set of stores handed to the service layer.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Credential store.
    pub users: Arc<dyn UserStore>,
    /// Event catalog.
    pub events: Arc<dyn EventStore>,
    /// Booking ledger.
    pub bookings: Arc<dyn BookingStore>,
    /// Backend probe.
    pub health: Arc<dyn HealthCheck>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            events: Arc::new(EventRepository::new(pool.clone())),
            bookings: Arc::new(BookingRepository::new(pool)),
            health: Arc::new(db),
        }
    }

    /// Stores backed by one shared in-memory store.
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Stores sharing an existing in-memory store.
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            events: store.clone(),
            bookings: store.clone(),
            health: store,
        }
    }

    /// Build the configured backend, applying migrations when asked to.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            StoreProvider::Memory => {
                info!("Using in-memory store; data is lost on restart");
                Ok(Self::memory())
            }
        }
    }
}

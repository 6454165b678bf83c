//! # eventhub-service
//!
//! Business logic for EventHub. Services are written against the store
//! traits from `eventhub-database`, so the same code runs over PostgreSQL
//! and over the in-memory store.

pub mod auth;
pub mod booking;
pub mod context;
pub mod event;
pub mod user;

pub use auth::AuthService;
pub use booking::BookingService;
pub use context::RequestContext;
pub use event::EventService;
pub use user::UserService;

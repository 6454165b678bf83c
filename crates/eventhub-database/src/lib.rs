//! # eventhub-database
//!
//! Persistence for EventHub: the store traits the service layer depends on,
//! their PostgreSQL implementations, a process-local in-memory
//! implementation, and connection/migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{BookingStore, EventStore, HealthCheck, Stores, UserStore};

//! # eventhub-entity
//!
//! Domain entity models for EventHub. Every struct in this crate represents
//! a table row or a domain value object. Row types derive `sqlx::FromRow`
//! and serialize with camelCase field names, which is the shape the HTTP
//! API returns.

pub mod booking;
pub mod event;
pub mod user;

//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
pub mod profile;

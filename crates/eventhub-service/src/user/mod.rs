//! Profile viewing and self-service updates.

pub mod service;

pub use service::{Profile, ProfileUpdate, UserService};

//! Event catalog service and day-window computation.

pub mod service;
pub mod window;

pub use service::{CreateEventInput, EventService};
pub use window::day_window;

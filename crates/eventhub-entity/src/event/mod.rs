//! Event catalog entities.

pub mod model;

pub use model::{DEFAULT_CAPACITY, DEFAULT_PRICE, Event, NewEvent};

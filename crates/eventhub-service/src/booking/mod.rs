//! Seat reservation and simulated payment.

pub mod service;

pub use service::BookingService;

//! Typed path parameter helpers.

use uuid::Uuid;

use eventhub_core::error::AppError;

/// Parses a record id from a path or body field.
///
/// An id that cannot exist is reported the same way as one that does not.
pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found(format!("{what} not found")))
}

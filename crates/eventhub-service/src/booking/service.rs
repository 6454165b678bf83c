//! Booking creation, history, and payment.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_database::BookingStore;
use eventhub_entity::booking::{Booking, BookingWithEvent};

use crate::context::RequestContext;

/// Reserves seats and records payment for the calling user.
#[derive(Debug, Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(bookings: Arc<dyn BookingStore>) -> Self {
        Self { bookings }
    }

    /// Reserve `seats` on `event_id`. The booking starts unpaid.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
        seats: i32,
    ) -> AppResult<Booking> {
        if seats < 1 {
            return Err(AppError::validation("Seats must be at least 1"));
        }

        match self
            .bookings
            .create_booking(ctx.user_id, event_id, seats)
            .await
        {
            Ok(booking) => {
                info!(
                    booking_id = %booking.id,
                    user_id = %ctx.user_id,
                    event_id = %event_id,
                    seats,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                warn!(
                    user_id = %ctx.user_id,
                    event_id = %event_id,
                    seats,
                    reason = %e.message,
                    "Booking rejected"
                );
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// The caller's bookings with events expanded, newest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<BookingWithEvent>> {
        self.bookings.list_bookings_for_user(ctx.user_id).await
    }

    /// Mark one of the caller's bookings as paid.
    pub async fn pay(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<BookingWithEvent> {
        let booking = self
            .bookings
            .mark_booking_paid(booking_id, ctx.user_id)
            .await?;

        info!(booking_id = %booking_id, user_id = %ctx.user_id, "Booking paid");
        Ok(booking)
    }
}

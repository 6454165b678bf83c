//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use eventhub_auth::jwt::{JwtDecoder, JwtEncoder};
use eventhub_auth::password::{PasswordHasher, PasswordValidator};
use eventhub_core::config::AppConfig;
use eventhub_database::Stores;
use eventhub_service::{AuthService, BookingService, EventService, UserService};

/// Shared application state, cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Backing stores.
    pub stores: Stores,
    /// Bearer token verification.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup and login.
    pub auth_service: Arc<AuthService>,
    /// Event catalog.
    pub event_service: Arc<EventService>,
    /// Booking ledger.
    pub booking_service: Arc<BookingService>,
    /// Profile self-service.
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            jwt_encoder,
        ));
        let event_service = Arc::new(EventService::new(
            Arc::clone(&stores.events),
            Arc::clone(&stores.users),
        ));
        let booking_service = Arc::new(BookingService::new(Arc::clone(&stores.bookings)));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.bookings),
            hasher,
            validator,
        ));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            auth_service,
            event_service,
            booking_service,
            user_service,
        }
    }
}

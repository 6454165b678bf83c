//! Signup and login against the credential store.

use std::sync::Arc;

use tracing::{info, warn};
use validator::ValidateEmail;

use eventhub_auth::jwt::{IssuedToken, JwtEncoder};
use eventhub_auth::password::{PasswordHasher, PasswordValidator};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::UserStore;
use eventhub_entity::user::{NewUser, User};

/// Emails are stored trimmed and lowercased so uniqueness is case-insensitive.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(crate) fn validate_email(email: &str) -> AppResult<()> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(AppError::validation("Invalid email address"))
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The bearer token issued for them.
    pub token: IssuedToken,
}

/// Handles account creation and credential exchange.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    /// Register a new user.
    ///
    /// The email must not already be on file; the check is enforced by the
    /// store so two concurrent signups cannot both win.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        let email = normalize_email(email);
        validate_email(&email)?;
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create_user(&NewUser {
                username: username.to_string(),
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Exchange email and password for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            warn!(email = %email, "Login rejected: unknown email");
            return Err(AppError::invalid_credentials("User not found"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials("Invalid password"));
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, expires_at = %token.expires_at, "User logged in");

        Ok(LoginOutcome { user, token })
    }
}

//! Profile viewing and self-service updates.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use eventhub_auth::password::{PasswordHasher, PasswordValidator};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::{BookingStore, UserStore};
use eventhub_entity::booking::BookingWithEvent;
use eventhub_entity::user::{User, UserChanges};

use crate::auth::service::{normalize_email, validate_email};
use crate::context::RequestContext;

/// A user together with their booking history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The user (password hash is never serialized).
    pub user: User,
    /// Their bookings, events expanded, newest first.
    pub bookings: Vec<BookingWithEvent>,
}

/// Requested profile changes. Absent or empty fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    bookings: Arc<dyn BookingStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            bookings,
            hasher,
            validator,
        }
    }

    async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_user_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// The caller's profile and bookings.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<Profile> {
        let user = self.current_user(ctx).await?;
        let bookings = self.bookings.list_bookings_for_user(user.id).await?;
        Ok(Profile { user, bookings })
    }

    /// Apply the provided fields to the caller's profile.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: ProfileUpdate,
    ) -> AppResult<User> {
        let mut changes = UserChanges {
            username: provided(update.username).map(|u| u.trim().to_string()),
            ..UserChanges::default()
        };

        if let Some(email) = provided(update.email) {
            let email = normalize_email(&email);
            validate_email(&email)?;
            changes.email = Some(email);
        }

        if let Some(password) = provided(update.password) {
            self.validator.validate(&password)?;
            changes.password_hash = Some(self.hasher.hash_password(&password)?);
        }

        if changes.is_empty() {
            return self.current_user(ctx).await;
        }

        let user = self.users.update_user(ctx.user_id, &changes).await?;

        info!(
            user_id = %user.id,
            username_changed = changes.username.is_some(),
            email_changed = changes.email.is_some(),
            password_changed = changes.password_hash.is_some(),
            "Profile updated"
        );
        Ok(user)
    }

    /// Grant admin rights to the user registered under `email`.
    pub async fn promote_admin(&self, email: &str) -> AppResult<User> {
        let email = normalize_email(email);
        let user = self
            .users
            .find_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No user registered as {email}")))?;

        let user = self.users.set_admin(user.id, true).await?;
        info!(user_id = %user.id, email = %user.email, "User promoted to admin");
        Ok(user)
    }
}

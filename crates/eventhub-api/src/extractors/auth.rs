//! `AuthUser` extractor: verifies the bearer token and injects the caller's context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use eventhub_core::error::AppError;
use eventhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, available to any handler that takes it.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        AppError::authentication("No token provided")
                    } else {
                        AppError::authentication("Invalid token")
                    }
                })?;

        let claims = state.jwt_decoder.decode(bearer.token())?;

        Ok(AuthUser(RequestContext::new(claims.user_id())))
    }
}

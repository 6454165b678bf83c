//! Auth handlers: signup and login.

use axum::Json;
use axum::extract::State;


use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::ValidJson;
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .auth_service
        .signup(&req.username, &req.email, &req.password)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
    }))
}

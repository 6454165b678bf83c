//! Profile handlers.

use axum::Json;
use axum::extract::State;

use eventhub_service::user::Profile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ProfileUpdatedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidJson};
use crate::state::AppState;

/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Profile>> {
    Ok(Json(state.user_service.get_profile(auth.context()).await?))
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileUpdatedResponse>> {
    let user = state
        .user_service
        .update_profile(auth.context(), req.into())
        .await?;

    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::UserData;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .get_user(&email)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| {
            ApiSuccess::new(StatusCode::OK, "User retrieved successfully", profile.into())
        })
}

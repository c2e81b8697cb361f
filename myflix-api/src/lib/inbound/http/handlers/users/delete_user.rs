use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::auth::models::Identity;
use crate::domain::auth::service::ensure_owner;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::Empty;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(email): Path<String>,
) -> Result<ApiSuccess<Empty>, ApiError> {
    ensure_owner(&identity, &email)?;

    state
        .user_service
        .delete_user(&email)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, "User was deleted", Empty {}))
}

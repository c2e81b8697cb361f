use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::auth::models::Identity;
use crate::domain::auth::service::ensure_owner;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::AccountData;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        // Value-type errors convert into UserError via #[from]
        let name = self.name.map(DisplayName::new).transpose()?;
        let password = self.password.map(Password::new).transpose()?;

        Ok(UpdateUserCommand {
            name,
            password,
            birthday: self.birthday,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(email): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    // Ownership is settled before the payload is looked at
    ensure_owner(&identity, &email)?;
    let Json(req) = body?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&email, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::OK, "User updated successfully.", user.into())
        })
}

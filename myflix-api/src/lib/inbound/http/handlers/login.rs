use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Session;
use crate::inbound::http::messages::AccountData;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref session| {
            ApiSuccess::new(
                StatusCode::OK,
                "You are successfully logged in",
                session.into(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

impl From<LoginRequestBody> for Credentials {
    fn from(body: LoginRequestBody) -> Self {
        Credentials {
            email: body.email,
            password: body.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: AccountData,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for LoginResponseData {
    fn from(session: &Session) -> Self {
        Self {
            user: (&session.user).into(),
            token: session.token.access_token.clone(),
            expires_at: session.token.expires_at,
        }
    }
}

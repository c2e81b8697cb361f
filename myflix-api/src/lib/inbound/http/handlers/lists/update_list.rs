use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::auth::models::Identity;
use crate::domain::auth::service::ensure_owner;
use crate::domain::movie::models::MovieId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::ListKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::UserData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListChange {
    Add,
    Remove,
}

async fn update_list(
    state: AppState,
    identity: Identity,
    email: String,
    movie_id: String,
    kind: ListKind,
    change: ListChange,
) -> Result<ApiSuccess<UserData>, ApiError> {
    ensure_owner(&identity, &email)?;
    let movie_id = MovieId::from_string(&movie_id).map_err(UserError::from)?;

    let (profile, message) = match change {
        ListChange::Add => (
            state.user_service.add_to_list(&email, kind, movie_id).await?,
            match kind {
                ListKind::Favorites => "Movie added to favorites",
                ListKind::ToWatch => "Movie added to watch list",
            },
        ),
        ListChange::Remove => (
            state
                .user_service
                .remove_from_list(&email, kind, movie_id)
                .await?,
            match kind {
                ListKind::Favorites => "Movie removed from favorites",
                ListKind::ToWatch => "Movie removed from watch list",
            },
        ),
    };

    Ok(ApiSuccess::new(StatusCode::OK, message, (&profile).into()))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((email, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    update_list(
        state,
        identity,
        email,
        movie_id,
        ListKind::Favorites,
        ListChange::Add,
    )
    .await
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((email, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    update_list(
        state,
        identity,
        email,
        movie_id,
        ListKind::Favorites,
        ListChange::Remove,
    )
    .await
}

pub async fn add_to_watch(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((email, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    update_list(
        state,
        identity,
        email,
        movie_id,
        ListKind::ToWatch,
        ListChange::Add,
    )
    .await
}

pub async fn remove_to_watch(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((email, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    update_list(
        state,
        identity,
        email,
        movie_id,
        ListKind::ToWatch,
        ListChange::Remove,
    )
    .await
}

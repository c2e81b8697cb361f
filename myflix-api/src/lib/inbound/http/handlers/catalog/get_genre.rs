use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::GenreData;
use crate::inbound::http::router::AppState;

pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    state
        .movie_service
        .get_genre(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| {
            ApiSuccess::new(StatusCode::OK, "Genre retrieved successfully", genre.into())
        })
}

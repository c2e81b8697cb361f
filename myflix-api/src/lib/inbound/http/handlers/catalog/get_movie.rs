use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::MovieData;
use crate::inbound::http::router::AppState;

/// Exact, case-sensitive title match.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    state
        .movie_service
        .get_movie(&title)
        .await
        .map_err(ApiError::from)
        .map(|ref details| {
            ApiSuccess::new(StatusCode::OK, "Movie retrieved successfully", details.into())
        })
}

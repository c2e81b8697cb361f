use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::DirectorData;
use crate::inbound::http::router::AppState;

pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DirectorData>, ApiError> {
    state
        .movie_service
        .get_director(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref director| {
            ApiSuccess::new(
                StatusCode::OK,
                "Director details retrieved successfully",
                director.into(),
            )
        })
}

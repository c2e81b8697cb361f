use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::catalog::get_director;
use super::handlers::catalog::get_genre;
use super::handlers::catalog::get_movie;
use super::handlers::catalog::list_movies;
use super::handlers::docs::openapi;
use super::handlers::lists::add_favorite;
use super::handlers::lists::add_to_watch;
use super::handlers::lists::remove_favorite;
use super::handlers::lists::remove_to_watch;
use super::handlers::login::login;
use super::handlers::users::create_user;
use super::handlers::users::delete_user;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::UserServicePort;

/// Services shared by every handler.
///
/// Held as trait objects so the router is independent of the storage adapters.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    user_service: Arc<dyn UserServicePort>,
    movie_service: Arc<dyn MovieServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        movie_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/users", post(create_user))
        .route("/docs.json", get(openapi));

    let protected_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/:title", get(get_movie))
        .route("/genres/:name", get(get_genre))
        .route("/directors/:name", get(get_director))
        .route("/users", get(list_users))
        .route(
            "/users/:email",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/lists/:email/favorite/:movie_id",
            post(add_favorite).delete(remove_favorite),
        )
        .route(
            "/lists/:email/watch/:movie_id",
            post(add_to_watch).delete(remove_to_watch),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // `/users` is both public (POST) and gated (GET); merge keeps the two apart
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the bearer token to an identity and adds it to
/// request extensions. Handlers behind it extract `Extension<Identity>`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Owned so that no borrow of the request is held across the await
    let token = extract_bearer_token(&req)
        .map(str::to_owned)
        .map_err(|reason| {
            tracing::warn!(reason, uri = %req.uri(), "Bearer token missing");
            ApiError::from(AuthError::Unauthenticated(reason.to_string()))
        })?;

    let identity = state.auth_service.authorize(&token).await?;
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, &'static str> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header")?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or("Invalid Authorization header format. Expected: Bearer <token>")?
        .trim();

    if token.is_empty() {
        return Err("Empty bearer token");
    }

    Ok(token)
}

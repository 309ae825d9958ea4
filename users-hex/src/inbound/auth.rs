//! Static bearer token check for API routes.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use users_types::UserStore;

use super::handlers::AppState;

/// Paths served without a token.
const PUBLIC_PATHS: &[&str] = &["/health", "/api-docs/openapi.json"];

/// Extracts the token from an Authorization header.
/// Expected format: "Bearer <token>"
fn extract_bearer(auth_header: Option<&str>) -> Option<&str> {
    auth_header?.strip_prefix("Bearer ")
}

fn token_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Rejects requests whose bearer token does not match the configured one.
///
/// A no-op when no token is configured.
pub async fn auth_middleware<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token.as_deref() else {
        return next.run(request).await;
    };

    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let verdict = match extract_bearer(auth_header) {
        Some(token) if token_matches(token, expected) => Ok(()),
        Some(_) => Err("Invalid API token"),
        None => Err("Missing or invalid Authorization header"),
    };

    match verdict {
        Ok(()) => next.run(request).await,
        Err(message) => unauthorized(message),
    }
}

fn unauthorized(message: &'static str) -> Response {
    tracing::warn!(reason = message, "authentication failure");
    (StatusCode::UNAUTHORIZED, message).into_response()
}

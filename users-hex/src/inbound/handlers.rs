//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use users_types::{AppError, IdQuery, MessageResponse, User, UserStore};

use crate::UserService;

/// Application state shared across handlers.
pub struct AppState<S: UserStore> {
    pub service: UserService<S>,
    /// Static bearer token required on API routes, if configured
    pub api_token: Option<String>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// Errors are reported as plain text.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, message).into_response()
    }
}

fn invalid_payload(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid request payload: {}", rejection.body_text()))
}

fn require_id(query: &IdQuery) -> Result<&str, AppError> {
    query
        .id()
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a user. The response carries the generated `id`.
#[tracing::instrument(skip_all)]
pub async fn create_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(user) = payload.map_err(invalid_payload)?;

    let user = state
        .service
        .create_user(user)
        .await
        .map_err(AppError::into_internal)?;

    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by logical ID. Every lookup failure is reported as 404.
#[tracing::instrument(skip(state))]
pub async fn get_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = require_id(&query)?;

    let user = state
        .service
        .get_user_by_id(id)
        .await
        .map_err(AppError::into_not_found)?;
    Ok(Json(user))
}

/// List all users.
#[tracing::instrument(skip(state))]
pub async fn list_users<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state
        .service
        .get_all_users()
        .await
        .map_err(AppError::into_not_found)?;
    Ok(Json(users))
}

/// Overwrite name, email and phone of an existing user.
#[tracing::instrument(skip_all)]
pub async fn update_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(user) = payload.map_err(invalid_payload)?;

    if user.id.is_empty() {
        return Err(AppError::BadRequest("User ID is required".into()).into());
    }

    let user = state
        .service
        .update_user(user)
        .await
        .map_err(AppError::into_internal)?;
    Ok(Json(user))
}

/// Archive a user by page ID.
#[tracing::instrument(skip(state))]
pub async fn delete_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page_id = require_id(&query)?;

    state
        .service
        .delete_user_by_page_id(page_id)
        .await
        .map_err(AppError::into_internal)?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

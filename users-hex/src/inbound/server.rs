//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use users_types::UserStore;

use super::auth::auth_middleware;
use super::handlers::{self, AppState};
use crate::UserService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Users API.
pub struct HttpServer<S: UserStore> {
    state: Arc<AppState<S>>,
}

impl<S: UserStore> HttpServer<S> {
    /// Creates a new HTTP server with the given service and no inbound auth.
    pub fn new(service: UserService<S>) -> Self {
        Self::with_api_token(service, None)
    }

    /// Creates a new HTTP server that requires `Authorization: Bearer <token>`
    /// on API routes when `api_token` is set.
    pub fn with_api_token(service: UserService<S>, api_token: Option<String>) -> Self {
        Self {
            state: Arc::new(AppState { service, api_token }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .route("/users", post(handlers::create_user::<S>))
            .route("/users/get", get(handlers::get_user::<S>))
            .route("/users/getall", get(handlers::list_users::<S>))
            .route(
                "/users/update",
                put(handlers::update_user::<S>).patch(handlers::update_user::<S>),
            )
            .route("/users/delete", delete(handlers::delete_user::<S>))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth_middleware::<S>,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

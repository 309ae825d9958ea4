//! Integration tests for the users HTTP surface.
//!
//! The router is driven with `oneshot` against an in-memory store that
//! counts how many calls reach it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use users_hex::{UserService, inbound::HttpServer};
use users_types::{StoreError, User, UserStore};

/// In-memory store keyed by page ID.
#[derive(Default)]
struct StubStore {
    pages: Mutex<HashMap<String, User>>,
    calls: Arc<AtomicUsize>,
    fail_with: Option<u16>,
}

impl StubStore {
    fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    fn with_user(user: User) -> Self {
        let store = Self::default();
        store
            .pages
            .lock()
            .unwrap()
            .insert(user.page_id.clone(), user);
        store
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn touch(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(status) => Err(StoreError::Remote {
                status,
                body: "remote failure".into(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for StubStore {
    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        self.touch()?;
        user.assign_new_id();
        user.page_id = format!("page-{}", user.id);
        self.pages
            .lock()
            .unwrap()
            .insert(user.page_id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        self.touch()?;
        self.pages
            .lock()
            .unwrap()
            .values()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user with ID {id} not found")))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        self.touch()?;
        Ok(self.pages.lock().unwrap().values().cloned().collect())
    }

    async fn update_user(&self, user: User) -> Result<User, StoreError> {
        self.touch()?;
        self.pages
            .lock()
            .unwrap()
            .insert(user.page_id.clone(), user.clone());
        Ok(user)
    }

    async fn delete_user_by_page_id(&self, page_id: &str) -> Result<(), StoreError> {
        self.touch()?;
        self.pages.lock().unwrap().remove(page_id);
        Ok(())
    }
}

/// Wraps a store in a server with inbound auth disabled.
fn server(store: StubStore) -> HttpServer<StubStore> {
    HttpServer::new(UserService::new(store))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

fn stored_user() -> User {
    User {
        id: "u-1".into(),
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone: "123".into(),
        page_id: "page-1".into(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Create
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_returns_201_with_generated_id() {
    let app = server(StubStore::default()).router();

    let response = send(
        app,
        json_request(
            Method::POST,
            "/users",
            json!({"name": "Ana", "email": "a@x.com", "telefone": "123"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["telefone"], "123");
}

#[tokio::test]
async fn test_create_user_malformed_json_is_400() {
    let server = server(StubStore::default());

    let response = send(
        server.router(),
        Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
}

#[tokio::test]
async fn test_create_user_store_failure_is_500() {
    let app = server(StubStore::failing(400)).router();

    let response = send(
        app,
        json_request(Method::POST, "/users", json!({"name": "Ana"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("remote failure"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_user_by_id() {
    let app = server(StubStore::with_user(stored_user())).router();

    let response = send(app, empty_request(Method::GET, "/users/get?id=u-1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["pageid"], "page-1");
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let app = server(StubStore::default()).router();

    let response = send(app, empty_request(Method::GET, "/users/get?id=nobody")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_store_failure_is_404() {
    let app = server(StubStore::failing(500)).router();

    let response = send(app, empty_request(Method::GET, "/users/get?id=u-1")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_without_id_is_400() {
    let server = server(StubStore::default());

    for uri in ["/users/get", "/users/get?id="] {
        let response = send(server.router(), empty_request(Method::GET, uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_get_all_users() {
    let app = server(StubStore::with_user(stored_user())).router();

    let response = send(app, empty_request(Method::GET, "/users/getall")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "u-1");
}

#[tokio::test]
async fn test_get_all_store_failure_is_404() {
    let app = server(StubStore::failing(502)).router();

    let response = send(app, empty_request(Method::GET, "/users/getall")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_user() {
    let app = server(StubStore::with_user(stored_user())).router();

    let response = send(
        app,
        json_request(
            Method::PUT,
            "/users/update",
            json!({"id": "u-1", "pageid": "page-1", "name": "Ana Maria", "email": "am@x.com", "telefone": "999"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ana Maria");
    assert_eq!(json["telefone"], "999");
}

#[tokio::test]
async fn test_update_accepts_patch() {
    let app = server(StubStore::with_user(stored_user())).router();

    let response = send(
        app,
        json_request(
            Method::PATCH,
            "/users/update",
            json!({"id": "u-1", "pageid": "page-1", "name": "Ana"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_without_id_is_400_and_skips_store() {
    let store = StubStore::default();
    let calls = store.call_counter();
    let server = server(store);

    let response = send(
        server.router(),
        json_request(
            Method::PUT,
            "/users/update",
            json!({"pageid": "page-1", "name": "Ana"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "User ID is required");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_store_failure_is_500() {
    let app = server(StubStore::failing(404)).router();

    let response = send(
        app,
        json_request(
            Method::PUT,
            "/users/update",
            json!({"id": "u-1", "pageid": "page-1"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user() {
    let app = server(StubStore::with_user(stored_user())).router();

    let response = send(app, empty_request(Method::DELETE, "/users/delete?id=page-1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "User deleted successfully"})
    );
}

#[tokio::test]
async fn test_delete_without_id_is_400_and_skips_store() {
    let store = StubStore::default();
    let calls = store.call_counter();
    let server = server(store);

    let response = send(server.router(), empty_request(Method::DELETE, "/users/delete")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "ID is required");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_store_failure_is_500() {
    let app = server(StubStore::failing(409)).router();

    let response = send(app, empty_request(Method::DELETE, "/users/delete?id=page-1")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ─────────────────────────────────────────────────────────────────────────────
// Health, docs and auth
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = server(StubStore::default()).router();

    let response = send(app, empty_request(Method::GET, "/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = server(StubStore::default()).router();

    let response = send(app, empty_request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"].get("/users/getall").is_some());
}

fn authed_server() -> HttpServer<StubStore> {
    HttpServer::with_api_token(
        UserService::new(StubStore::with_user(stored_user())),
        Some("tok_123".into()),
    )
}

#[tokio::test]
async fn test_auth_rejects_missing_token() {
    let response = send(
        authed_server().router(),
        empty_request(Method::GET, "/users/getall"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_rejects_wrong_token() {
    let request = Request::builder()
        .uri("/users/getall")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();

    let response = send(authed_server().router(), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_accepts_configured_token() {
    let request = Request::builder()
        .uri("/users/getall")
        .header(header::AUTHORIZATION, "Bearer tok_123")
        .body(Body::empty())
        .unwrap();

    let response = send(authed_server().router(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_leaves_health_open() {
    let response = send(authed_server().router(), empty_request(Method::GET, "/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

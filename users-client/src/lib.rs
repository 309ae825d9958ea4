//! # Users Client SDK
//!
//! A typed Rust client for the Users API.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use users_types::{MessageResponse, User};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Users API client.
pub struct UsersClient {
    base_url: String,
    api_token: Option<String>,
    http: Client,
}

impl UsersClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            http: Client::new(),
        }
    }

    /// Sets the bearer token sent with every request.
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a user. The returned record carries the generated `id`.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<User, ClientError> {
        let user = User::new(name, email, phone);
        self.execute(self.http.post(self.url("/users")).json(&user))
            .await
    }

    /// Gets a user by logical ID.
    pub async fn get_user(&self, id: &str) -> Result<User, ClientError> {
        self.execute(self.http.get(self.url("/users/get")).query(&[("id", id)]))
            .await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.execute(self.http.get(self.url("/users/getall"))).await
    }

    /// Overwrites name, email and phone. `user.id` and `user.page_id` must be set.
    pub async fn update_user(&self, user: &User) -> Result<User, ClientError> {
        self.execute(self.http.put(self.url("/users/update")).json(user))
            .await
    }

    /// Archives the user stored at `page_id`.
    pub async fn delete_user(&self, page_id: &str) -> Result<MessageResponse, ClientError> {
        self.execute(
            self.http
                .delete(self.url("/users/delete"))
                .query(&[("id", page_id)]),
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, mut req: RequestBuilder) -> Result<T, ClientError> {
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

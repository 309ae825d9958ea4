//! Notion HTTP client implementing the `UserStore` port.

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use users_types::{StoreError, User, UserStore};

use crate::mapping;
use crate::properties::{ArchivePageRequest, CreatedPage, QueryRequest, QueryResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_VERSION: &str = "2022-06-28";

const VERSION_HEADER: &str = "Notion-Version";

/// Connection settings for the Notion API.
#[derive(Clone)]
pub struct NotionConfig {
    pub base_url: String,
    pub token: String,
    pub database_id: String,
    pub version: String,
}

impl NotionConfig {
    /// Settings for the public API with the default version header.
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            database_id: database_id.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("version", &self.version)
            .finish()
    }
}

/// User store backed by a Notion database.
///
/// Each record is one page in the database. Deletion archives the page.
pub struct NotionStore {
    config: NotionConfig,
    http: Client,
}

impl NotionStore {
    /// Creates a store with its own connection pool.
    pub fn new(config: NotionConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a store sharing an existing `reqwest::Client`.
    pub fn with_client(mut config: NotionConfig, http: Client) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config, http }
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.config.base_url)
    }

    fn page_url(&self, page_id: &str) -> String {
        format!("{}/pages/{}", self.config.base_url, page_id)
    }

    fn query_url(&self) -> String {
        format!(
            "{}/databases/{}/query",
            self.config.base_url, self.config.database_id
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, "application/json")
            .header(VERSION_HEADER, &self.config.version)
    }

    /// Sends a JSON body and reads the whole response body.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<(StatusCode, String), StoreError> {
        debug!(%method, url, "sending request to Notion");

        let resp = self
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), url, "Notion returned an error");
        }
        Ok((status, text))
    }

    async fn query(&self, body: &QueryRequest) -> Result<QueryResponse, StoreError> {
        let (status, text) = self.send(Method::POST, &self.query_url(), body).await?;
        expect_status(status, text, &[StatusCode::OK])
            .and_then(|text| serde_json::from_str(&text).map_err(decode_error))
    }
}

fn expect_status(
    status: StatusCode,
    body: String,
    accepted: &[StatusCode],
) -> Result<String, StoreError> {
    if accepted.contains(&status) {
        Ok(body)
    } else {
        Err(StoreError::Remote {
            status: status.as_u16(),
            body,
        })
    }
}

fn decode_error(err: serde_json::Error) -> StoreError {
    StoreError::Decode(err.to_string())
}

const CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

#[async_trait]
impl UserStore for NotionStore {
    #[instrument(skip_all)]
    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        user.assign_new_id();
        let payload = mapping::create_page_request(&user, &self.config.database_id);

        let (status, text) = self.send(Method::POST, &self.pages_url(), &payload).await?;
        let text = expect_status(status, text, CREATED)?;

        // The page id is only needed for later updates; a body without one is not an error.
        if let Some(page_id) = serde_json::from_str::<CreatedPage>(&text)
            .ok()
            .and_then(|page| page.id)
        {
            user.page_id = page_id;
        }

        debug!(user_id = %user.id, page_id = %user.page_id, "user saved");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        let body = QueryRequest {
            filter: Some(mapping::id_filter(id)),
            start_cursor: None,
        };
        let resp = self.query(&body).await?;

        let page = resp
            .results
            .first()
            .ok_or_else(|| StoreError::NotFound(format!("user with ID {id} not found")))?;
        mapping::user_from_page(page)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let mut users = Vec::new();
        let mut cursor = None;
        let mut seen = HashSet::new();

        loop {
            let body = QueryRequest {
                filter: None,
                start_cursor: cursor.take(),
            };
            let resp = self.query(&body).await?;

            for page in &resp.results {
                users.push(mapping::user_from_page(page)?);
            }

            match resp.next_cursor {
                Some(next) if resp.has_more => {
                    if !seen.insert(next.clone()) {
                        return Err(StoreError::Decode(format!(
                            "query returned cursor {next:?} more than once"
                        )));
                    }
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        debug!(count = users.len(), "users listed");
        Ok(users)
    }

    #[instrument(skip_all, fields(user_id = %user.id, page_id = %user.page_id))]
    async fn update_user(&self, user: User) -> Result<User, StoreError> {
        if user.id.is_empty() {
            return Err(StoreError::Validation("user ID cannot be empty".into()));
        }
        if user.page_id.is_empty() {
            return Err(StoreError::Validation("page ID cannot be empty".into()));
        }

        let payload = mapping::update_page_request(&user);
        let (status, text) = self
            .send(Method::PATCH, &self.page_url(&user.page_id), &payload)
            .await?;
        expect_status(status, text, CREATED)?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user_by_page_id(&self, page_id: &str) -> Result<(), StoreError> {
        if page_id.is_empty() {
            return Err(StoreError::Validation("page ID is required".into()));
        }

        let payload = ArchivePageRequest { archived: true };
        let (status, text) = self
            .send(Method::PATCH, &self.page_url(page_id), &payload)
            .await?;
        expect_status(status, text, &[StatusCode::OK])?;

        Ok(())
    }
}

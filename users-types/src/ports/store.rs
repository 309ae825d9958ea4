//! User store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! The Notion adapter implements it; tests substitute in-memory doubles.

use crate::domain::User;
use crate::error::StoreError;

/// Capability set for persisting user records.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Stores a new record under a freshly generated identifier.
    ///
    /// Returns the record as stored, with `id` (and `page_id` when the
    /// store reports one) filled in.
    async fn save(&self, user: User) -> Result<User, StoreError>;

    /// Finds the first record whose logical identifier equals `id`.
    async fn find_by_id(&self, id: &str) -> Result<User, StoreError>;

    /// Lists every stored record.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Overwrites name, email and phone of the record at `user.page_id`.
    ///
    /// Fails without touching the store when `user.id` is empty.
    async fn update_user(&self, user: User) -> Result<User, StoreError>;

    /// Archives the record stored at `page_id`.
    ///
    /// Fails without touching the store when `page_id` is empty.
    async fn delete_user_by_page_id(&self, page_id: &str) -> Result<(), StoreError>;
}

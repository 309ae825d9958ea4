//! User Application Service
//!
//! Forwards each use case to the store port.
//! Contains NO infrastructure logic and no validation of its own.

use users_types::{AppError, User, UserStore};

/// Application service for user operations.
///
/// Generic over `S: UserStore` - the adapter is injected at compile time.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a new user service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create_user(&self, user: User) -> Result<User, AppError> {
        self.store.save(user).await.map_err(Into::into)
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AppError> {
        self.store.find_by_id(id).await.map_err(Into::into)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.store.find_all().await.map_err(Into::into)
    }

    pub async fn update_user(&self, user: User) -> Result<User, AppError> {
        self.store.update_user(user).await.map_err(Into::into)
    }

    pub async fn delete_user_by_page_id(&self, page_id: &str) -> Result<(), AppError> {
        self.store
            .delete_user_by_page_id(page_id)
            .await
            .map_err(Into::into)
    }
}

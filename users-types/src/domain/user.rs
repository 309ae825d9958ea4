//! User domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user record.
///
/// `id` is the logical identifier, generated once on creation. `page_id` is
/// the remote store's own identifier for the stored item and is what update
/// and delete calls are addressed by.
///
/// Every field is optional on the wire; missing keys decode to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// Logical identifier (UUID v4, assigned on creation)
    #[schema(example = "0b6f7c1e-4f4e-4c61-9d43-3f0cb1a2a7a9")]
    pub id: String,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(rename = "telefone")]
    #[schema(example = "123")]
    pub phone: String,
    /// Identifier of the page holding this record in the remote store
    #[serde(rename = "pageid")]
    pub page_id: String,
}

impl User {
    /// Creates a record that has not been stored yet.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Replaces the logical identifier with a freshly generated one.
    pub fn assign_new_id(&mut self) {
        self.id = Uuid::new_v4().to_string();
    }
}

//! Translation between `User` records and Notion page properties.
//!
//! | Field   | Property   | Kind        |
//! |---------|------------|-------------|
//! | `id`    | `ID`       | `rich_text` |
//! | `name`  | `Name`     | `title`     |
//! | `email` | `Email`    | `rich_text` |
//! | `phone` | `Telefone` | `rich_text` |
//!
//! The page's own `id` becomes `User::page_id`.

use users_types::{StoreError, User};

use crate::properties::{
    CreatePageRequest, Filter, Page, Parent, PropertyMap, PropertyValue, RichText,
    UpdatePageRequest,
};

pub const PROP_ID: &str = "ID";
pub const PROP_NAME: &str = "Name";
pub const PROP_EMAIL: &str = "Email";
pub const PROP_PHONE: &str = "Telefone";

/// Builds the `POST /pages` body for a new record, parented to `database_id`.
pub fn create_page_request(user: &User, database_id: &str) -> CreatePageRequest {
    let mut properties = editable_properties(user);
    properties.insert(PROP_ID.to_string(), PropertyValue::rich_text(&user.id));

    CreatePageRequest {
        parent: Parent {
            database_id: database_id.to_string(),
        },
        properties,
    }
}

/// Builds the `PATCH /pages/{id}` body overwriting name, email and phone.
///
/// The logical identifier is never re-sent.
pub fn update_page_request(user: &User) -> UpdatePageRequest {
    UpdatePageRequest {
        properties: editable_properties(user),
    }
}

/// Filter selecting pages whose `ID` property equals `id`.
pub fn id_filter(id: &str) -> Filter {
    Filter::rich_text_equals(PROP_ID, id)
}

/// Decodes a page into a record.
pub fn user_from_page(page: &Page) -> Result<User, StoreError> {
    let props = &page.properties;
    Ok(User {
        id: rich_text_content(props, PROP_ID)?,
        name: title_content(props, PROP_NAME)?,
        email: rich_text_content(props, PROP_EMAIL)?,
        phone: rich_text_content(props, PROP_PHONE)?,
        page_id: page.id.clone(),
    })
}

fn editable_properties(user: &User) -> PropertyMap {
    PropertyMap::from([
        (PROP_NAME.to_string(), PropertyValue::title(&user.name)),
        (PROP_EMAIL.to_string(), PropertyValue::rich_text(&user.email)),
        (PROP_PHONE.to_string(), PropertyValue::rich_text(&user.phone)),
    ])
}

fn first_content(items: &[RichText]) -> String {
    items
        .first()
        .map(|item| item.content().to_string())
        .unwrap_or_default()
}

fn rich_text_content(props: &PropertyMap, name: &str) -> Result<String, StoreError> {
    match props.get(name) {
        Some(PropertyValue::RichText { rich_text }) => Ok(first_content(rich_text)),
        Some(_) => Err(StoreError::Decode(format!(
            "property {name:?} is not a rich_text property"
        ))),
        None => Err(missing(name)),
    }
}

fn title_content(props: &PropertyMap, name: &str) -> Result<String, StoreError> {
    match props.get(name) {
        Some(PropertyValue::Title { title }) => Ok(first_content(title)),
        Some(_) => Err(StoreError::Decode(format!(
            "property {name:?} is not a title property"
        ))),
        None => Err(missing(name)),
    }
}

fn missing(name: &str) -> StoreError {
    StoreError::Decode(format!("property {name:?} is missing"))
}

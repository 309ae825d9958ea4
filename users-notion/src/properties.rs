//! Typed request and response bodies for the Notion API.
//!
//! Only the subset of the API the users store touches is modelled:
//! page creation, page patch, database query, and the `title` /
//! `rich_text` property kinds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property values keyed by property name.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

// ─────────────────────────────────────────────────────────────────────────────
// Property values
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// One element of a `title` or `rich_text` array.
///
/// Responses carry extra keys (`annotations`, `href`, ...) which are ignored.
/// Non-text elements such as mentions have no `text` object, only `plain_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl RichText {
    /// A plain text element wrapping `content`.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(TextContent {
                content: content.into(),
            }),
            plain_text: None,
        }
    }

    /// Returns the text content, falling back to `plain_text`.
    pub fn content(&self) -> &str {
        self.text
            .as_ref()
            .map(|t| t.content.as_str())
            .or(self.plain_text.as_deref())
            .unwrap_or_default()
    }
}

/// A page property value.
///
/// Serializes as `{"title": [...]}` or `{"rich_text": [...]}`. Property kinds
/// this service does not use deserialize into `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Other(serde_json::Value),
}

impl PropertyValue {
    /// A title property holding a single text element.
    pub fn title(content: impl Into<String>) -> Self {
        Self::Title {
            title: vec![RichText::text(content)],
        }
    }

    /// A rich text property holding a single text element.
    pub fn rich_text(content: impl Into<String>) -> Self {
        Self::RichText {
            rich_text: vec![RichText::text(content)],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: PropertyMap,
}

/// Body of `PATCH /pages/{id}` when overwriting properties.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePageRequest {
    pub properties: PropertyMap,
}

/// Body of `PATCH /pages/{id}` when archiving.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArchivePageRequest {
    pub archived: bool,
}

/// A page object as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// Minimal view of the page returned by `POST /pages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedPage {
    #[serde(default)]
    pub id: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Database query
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFilter {
    pub equals: String,
}

/// A `rich_text` property filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub property: String,
    pub rich_text: TextFilter,
}

impl Filter {
    pub fn rich_text_equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            rich_text: TextFilter {
                equals: value.into(),
            },
        }
    }
}

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

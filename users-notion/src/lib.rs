//! # Users Notion
//!
//! Store adapter that keeps user records in a Notion database.
//! This crate provides `NotionStore`, which implements the `UserStore` port.
//!
//! ## Layout
//!
//! - `properties` - Typed Notion request/response bodies
//! - `mapping` - Translation between `User` and Notion page properties
//! - `client` - The HTTP client issuing page and database-query calls

pub mod client;
pub mod mapping;
pub mod properties;


pub use client::{DEFAULT_BASE_URL, DEFAULT_VERSION, NotionConfig, NotionStore};

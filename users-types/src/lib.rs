//! # Users Types
//!
//! Domain types and port traits for the users service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - The `User` record
//! - `ports/` - Trait definitions that store adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Store and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::User;
pub use dto::*;
pub use error::{AppError, StoreError};
pub use ports::UserStore;

//! # Users Hex
//!
//! Application service layer and HTTP adapter for the users service.
//!
//! ## Architecture
//!
//! - `service/` - Use-case layer (delegates to the store port)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the HTTP surface
//!
//! The service is generic over `S: UserStore`, allowing
//! different store implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::UserService;

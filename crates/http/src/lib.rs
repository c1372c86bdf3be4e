//! HTTP boundary for outcome values: status mapping, axum responses, and a
//! small demo service.
//!
//! The layout follows the usual split:
//! - `mapping.rs`: well-known code → HTTP status
//! - `response.rs`: [`Reply`], the `IntoResponse` adapter
//! - `config.rs`: environment-driven server configuration
//! - `catalog.rs` / `app.rs`: demo service layer and its routes

pub mod app;
pub mod catalog;
pub mod config;
pub mod mapping;
pub mod response;

pub use config::{ConfigError, HttpConfig};
pub use mapping::{StatusMapping, status_for};
pub use response::Reply;

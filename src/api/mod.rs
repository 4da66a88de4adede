//! HTTP API layer.
//!
//! Translates HTTP requests into use-case calls and maps outcomes to
//! status codes. Clients only ever see 201, 307, 400, 404 and 500
//! (503 while shutting down).
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Validation and request tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

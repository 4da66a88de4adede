//! HTTP middleware for request processing.
//!
//! Provides input validation and observability middleware.

pub mod tracing;
pub mod validate;

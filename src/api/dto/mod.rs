//! Data Transfer Objects for JSON endpoints.
//!
//! Shortening and redirect exchange plain text, so only the health check
//! has a JSON shape.

pub mod health;

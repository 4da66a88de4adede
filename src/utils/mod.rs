//! Utility functions for id generation and request validation.
//!
//! - [`code_generator`] - Random base62 short id generation
//! - [`url_validator`] - Original URL acceptance rules

pub mod code_generator;
pub mod url_validator;

//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortId`] - Validated short identifier
//! - [`Link`] - A shortened URL mapping

pub mod link;
pub mod short_id;

pub use link::Link;
pub use short_id::{InvalidShortId, ShortId};

//! Domain layer containing business entities and contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Capability traits defined here are implemented elsewhere and
//! injected into [`crate::application::services::LinkService`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`id_generator`] - Short id generation contract

pub mod entities;
pub mod id_generator;
pub mod repositories;

pub use id_generator::IdGenerator;

#[cfg(test)]
pub use id_generator::MockIdGenerator;

//! # shurs
//!
//! A small URL shortening service built with Axum. Original URLs are kept in
//! memory for the lifetime of the process.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short id and link entities, store and generator traits
//! - **Application Layer** ([`application`]) - Unique id allocation and lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store
//! - **API Layer** ([`api`]) - Handlers, validation and tracing middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Flags
//! cargo run -- -a :8080 -b http://localhost:8080
//!
//! # Or environment (takes priority over flags)
//! SERVER_ADDRESS=:8080 BASE_URL=http://localhost:8080 cargo run
//!
//! curl -d 'https://example.com' http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Shortener};
    pub use crate::domain::IdGenerator;
    pub use crate::domain::entities::{Link, ShortId};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::{AppError, GenerateError, ShortenError, StoreError};
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::Base62Generator;
}

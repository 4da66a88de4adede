//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the id generator
//! and the link store. Services consume domain traits and provide a narrow
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Unique id allocation, link creation and lookup

pub mod services;

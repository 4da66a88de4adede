//! Link store implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Process-local link storage

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;

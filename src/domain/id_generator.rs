//! Short id generation contract.

use crate::domain::entities::ShortId;
use crate::error::GenerateError;

/// Produces candidate short ids.
///
/// Generators make no uniqueness promise; the caller checks candidates
/// against the store.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::Base62Generator`] - random base62 ids
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh candidate id.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessUnavailable`] if the entropy source fails.
    fn generate(&self) -> Result<ShortId, GenerateError>;
}

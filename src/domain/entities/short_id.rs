//! Short identifier value type.

use std::fmt;

/// Ids that collide with fixed routes and can never be handed out.
pub const RESERVED_IDS: &[&str] = &["health"];

/// A fixed-length alphanumeric identifier mapped to an original URL.
///
/// Every character is drawn from `[0-9a-zA-Z]`. Values coming from outside the
/// process (request paths) are checked with [`ShortId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortId(String);

/// Reasons a string is rejected as a [`ShortId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidShortId {
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("character {0:?} is not in [0-9a-zA-Z]")]
    Character(char),
}

impl ShortId {
    /// Validates `value` as an id of exactly `length` alphanumeric ASCII characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShortId`] describing the first rule that was violated.
    pub fn parse(value: &str, length: usize) -> Result<Self, InvalidShortId> {
        let actual = value.chars().count();
        if actual != length {
            return Err(InvalidShortId::Length {
                expected: length,
                actual,
            });
        }

        if let Some(bad) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(InvalidShortId::Character(bad));
        }

        Ok(Self(value.to_string()))
    }

    /// Wraps a value already known to be drawn from the alphabet.
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id shadows a fixed route such as `/health`.
    pub fn is_reserved(&self) -> bool {
        RESERVED_IDS.contains(&self.0.as_str())
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

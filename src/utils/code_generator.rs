//! Short id generation.
//!
//! Ids are built from operating-system entropy (`getrandom`) and mapped onto
//! the base62 alphabet one byte per character.

use crate::domain::IdGenerator;
use crate::domain::entities::ShortId;
use crate::error::GenerateError;

/// The 62 symbols ids are drawn from, in mapping order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random base62 id generator with a fixed output length.
///
/// Each random byte selects `ALPHABET[byte % 62]`. Since 256 is not a multiple
/// of 62, the first `256 % 62 = 8` symbols (`0`..`7`) are slightly more likely
/// than the rest.
#[derive(Debug, Clone)]
pub struct Base62Generator {
    length: usize,
}

impl Base62Generator {
    /// Creates a generator producing ids of `length` characters.
    ///
    /// `length` must be positive; configuration substitutes a default for
    /// non-positive values before this is called.
    pub fn new(length: usize) -> Self {
        debug_assert!(length > 0, "id length must be positive");
        Self { length }
    }
}

impl IdGenerator for Base62Generator {
    fn generate(&self) -> Result<ShortId, GenerateError> {
        let mut buffer = vec![0u8; self.length];

        getrandom::fill(&mut buffer)
            .map_err(|e| GenerateError::RandomnessUnavailable(e.to_string()))?;

        Ok(ShortId::new_unchecked(encode_base62(&buffer)))
    }
}

/// Maps every byte onto the alphabet with a modulo-62 reduction.
pub fn encode_base62(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| char::from(ALPHABET[usize::from(*b) % ALPHABET.len()]))
        .collect()
}

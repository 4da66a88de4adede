//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::ShortId;

/// A stored pairing of a short id and the original URL.
///
/// The URL was validated at the HTTP boundary (non-empty scheme and host);
/// stores keep it verbatim.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: ShortId,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link stamped with the current time.
    pub fn new(id: ShortId, original_url: impl Into<String>) -> Self {
        Self {
            id,
            original_url: original_url.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let before = Utc::now();
        let link = Link::new(ShortId::new_unchecked("abc12345"), "https://example.com");

        assert_eq!(link.id.as_str(), "abc12345");
        assert_eq!(link.original_url, "https://example.com");
        assert!(link.created_at >= before);
    }
}

//! Input content hashing.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the input content.
///
/// Stored alongside every generation so identical inputs can be spotted
/// without comparing full text.
///
/// # Examples
///
/// ```
/// let hash = reflow_database::content_hash("hello");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.starts_with("2cf24dba"));
/// ```
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(content_hash("same input"), content_hash("same input"));
        assert_ne!(content_hash("one"), content_hash("two"));
    }
}

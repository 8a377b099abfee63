//! SHA-256 digests and ETag encoding for content-addressed storage.
//!
//! Every object's identity in the CAS area and its ETag are both derived
//! from the same SHA-256 digest of its payload (§3), generalized from the
//! donor's MD5-based `checksums.rs` `StreamingHasher` shape.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest as _, Sha256};

/// Compute the hex-encoded SHA-256 digest of `data`.
///
/// This hex string is both the CAS blob's filename and the refcount table's
/// key.
#[must_use]
pub fn hex_digest(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Derive an object's ETag: URL-safe, unpadded base64 of the raw SHA-256
/// digest bytes named by `digest_hex`.
///
/// # Panics
///
/// Panics if `digest_hex` is not a well-formed hex string, which can only
/// happen if it did not originate from [`hex_digest`].
#[must_use]
pub fn etag_from_hex(digest_hex: &str) -> String {
    let bytes = hex::decode(digest_hex).expect("digest is a well-formed hex SHA-256");
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_64_hex_chars() {
        let digest = hex_digest(b"hello");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_should_derive_stable_etag_from_hex_digest() {
        let digest = hex_digest(b"hello");
        let etag = etag_from_hex(&digest);
        assert!(!etag.contains('+'));
        assert!(!etag.contains('/'));
        assert!(!etag.contains('='));
        // Deterministic: same input, same ETag.
        assert_eq!(etag, etag_from_hex(&hex_digest(b"hello")));
    }

    #[test]
    fn test_should_differ_for_different_payloads() {
        assert_ne!(hex_digest(b"hello"), hex_digest(b"world"));
    }

    #[test]
    fn test_empty_payload_has_stable_digest() {
        let digest = hex_digest(b"");
        assert_eq!(digest.len(), 64);
    }
}

//! Validation for bucket names, object keys, and user-defined metadata.
//!
//! Unlike AWS S3's DNS-compatible bucket naming rules, this service's naming
//! constraints are the simplified ones a filesystem-backed store actually
//! needs: a bucket name is a single path segment, and an object key is any
//! relative path that can't escape its bucket directory.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::S3ServiceError;

/// Maximum total size (in bytes) of all user-defined metadata keys and values.
const MAX_METADATA_SIZE: usize = 2048;

/// Validate an S3 bucket name.
///
/// Rules (§3): non-empty, contains no `/` or `\`, does not start with `.`,
/// and is not `.` or `..`.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidBucketName`] if any rule is violated.
///
/// # Examples
///
/// ```
/// use ruststack_s3_core::validation::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-bucket").is_ok());
/// assert!(validate_bucket_name("").is_err());
/// assert!(validate_bucket_name("..").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> Result<(), S3ServiceError> {
    if name.is_empty() {
        return Err(S3ServiceError::InvalidBucketName {
            name: name.to_owned(),
            reason: "Bucket name must not be empty".to_owned(),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(S3ServiceError::InvalidBucketName {
            name: name.to_owned(),
            reason: "Bucket name must not contain '/' or '\\'".to_owned(),
        });
    }

    if name == "." || name == ".." {
        return Err(S3ServiceError::InvalidBucketName {
            name: name.to_owned(),
            reason: "Bucket name must not be '.' or '..'".to_owned(),
        });
    }

    if name.starts_with('.') {
        return Err(S3ServiceError::InvalidBucketName {
            name: name.to_owned(),
            reason: "Bucket name must not start with '.'".to_owned(),
        });
    }

    Ok(())
}

/// Validate an S3 object key.
///
/// Rules (§3): any non-empty byte string that is not `.`, not `..`, contains
/// no `..` segment, and is not absolute (does not start with `/`).
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if any rule is violated.
///
/// # Examples
///
/// ```
/// use ruststack_s3_core::validation::validate_object_key;
///
/// assert!(validate_object_key("photos/2024/image.jpg").is_ok());
/// assert!(validate_object_key("../etc/passwd").is_err());
/// assert!(validate_object_key("/etc/passwd").is_err());
/// ```
pub fn validate_object_key(key: &str) -> Result<(), S3ServiceError> {
    if key.is_empty() {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be empty".to_owned(),
        });
    }

    if key == "." || key == ".." {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be '.' or '..'".to_owned(),
        });
    }

    if key.starts_with('/') {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be absolute".to_owned(),
        });
    }

    if key.split('/').any(|segment| segment == "..") {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not contain a '..' segment".to_owned(),
        });
    }

    Ok(())
}

/// Validate user-defined metadata (`x-amz-meta-*` headers).
///
/// Rules: total size of all keys plus all values must not exceed 2 KB.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if the total metadata size
/// exceeds the limit.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use ruststack_s3_core::validation::validate_metadata;
///
/// let mut meta = HashMap::new();
/// meta.insert("color".to_owned(), "blue".to_owned());
/// assert!(validate_metadata(&meta).is_ok());
/// ```
pub fn validate_metadata<S: BuildHasher>(
    metadata: &HashMap<String, String, S>,
) -> Result<(), S3ServiceError> {
    let total_size: usize = metadata.iter().map(|(k, v)| k.len() + v.len()).sum();

    if total_size > MAX_METADATA_SIZE {
        return Err(S3ServiceError::InvalidArgument {
            message: format!(
                "User-defined metadata must not exceed {MAX_METADATA_SIZE} bytes, got {total_size}"
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Bucket name validation
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_accept_valid_bucket_names() {
        let valid = ["my-bucket", "abc", "bucket.with.dots", "B", "bucket_1"];
        for name in valid {
            assert!(validate_bucket_name(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn test_should_reject_empty_bucket_name() {
        assert!(validate_bucket_name("").is_err());
    }

    #[test]
    fn test_should_reject_bucket_name_with_slash() {
        assert!(validate_bucket_name("a/b").is_err());
    }

    #[test]
    fn test_should_reject_bucket_name_with_backslash() {
        assert!(validate_bucket_name("a\\b").is_err());
    }

    #[test]
    fn test_should_reject_dot_bucket_name() {
        assert!(validate_bucket_name(".").is_err());
        assert!(validate_bucket_name("..").is_err());
    }

    #[test]
    fn test_should_reject_leading_dot_bucket_name() {
        assert!(validate_bucket_name(".hidden").is_err());
    }

    // -----------------------------------------------------------------------
    // Object key validation
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_accept_valid_object_keys() {
        assert!(validate_object_key("a").is_ok());
        assert!(validate_object_key("photos/2024/image.jpg").is_ok());
        assert!(validate_object_key("a..b/c").is_ok());
    }

    #[test]
    fn test_should_reject_empty_object_key() {
        assert!(validate_object_key("").is_err());
    }

    #[test]
    fn test_should_reject_dot_object_key() {
        assert!(validate_object_key(".").is_err());
        assert!(validate_object_key("..").is_err());
    }

    #[test]
    fn test_should_reject_absolute_object_key() {
        assert!(validate_object_key("/etc/passwd").is_err());
    }

    #[test]
    fn test_should_reject_traversal_segment_in_object_key() {
        assert!(validate_object_key("../etc/passwd").is_err());
        assert!(validate_object_key("a/../b").is_err());
        assert!(validate_object_key("a/b/..").is_err());
    }

    // -----------------------------------------------------------------------
    // Metadata validation
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_accept_valid_metadata() {
        let mut meta = HashMap::new();
        meta.insert("color".to_owned(), "blue".to_owned());
        assert!(validate_metadata(&meta).is_ok());
    }

    #[test]
    fn test_should_accept_empty_metadata() {
        let meta = HashMap::new();
        assert!(validate_metadata(&meta).is_ok());
    }

    #[test]
    fn test_should_reject_oversized_metadata() {
        let mut meta = HashMap::new();
        meta.insert("key".to_owned(), "v".repeat(2048));
        assert!(validate_metadata(&meta).is_err());
    }

    #[test]
    fn test_should_accept_metadata_at_limit() {
        let mut meta = HashMap::new();
        meta.insert("key".to_owned(), "v".repeat(2045));
        assert!(validate_metadata(&meta).is_ok());
    }
}

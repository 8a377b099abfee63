//! `RenameObjectInput`.
//!
//! `RenameObject` is not part of the standard AWS S3 API; it follows the
//! `x-amz-rename-source` convention used by some S3-compatible servers to
//! rename a key within a bucket without a copy-then-delete round trip. Hand
//! written rather than Smithy-generated, since there is no Smithy shape to
//! generate it from.

/// S3 RenameObjectInput.
#[derive(Debug, Clone, Default)]
pub struct RenameObjectInput {
    /// HTTP label (URI path): the destination bucket.
    pub bucket: String,
    /// HTTP label (URI path): the destination key.
    pub key: String,
    /// HTTP header: `x-amz-rename-source`, a `/`-prefixed `bucket/key` path.
    pub rename_source: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

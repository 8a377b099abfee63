//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::{BucketLoggingStatus, ChecksumAlgorithm};

/// S3 GetBucketLoggingInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketLoggingInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// S3 PutBucketLoggingInput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketLoggingInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP payload body.
    pub bucket_logging_status: BucketLoggingStatus,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

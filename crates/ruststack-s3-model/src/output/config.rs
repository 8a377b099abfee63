//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use crate::types::LoggingEnabled;

/// S3 GetBucketLoggingOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketLoggingOutput {
    pub logging_enabled: Option<LoggingEnabled>,
}

/// S3 PutBucketLoggingOutput. No response elements; a bare 200 OK.
#[derive(Debug, Clone, Default)]
pub struct PutBucketLoggingOutput {}

//! The seam between the access-log pipeline and the storage engine.

use futures::future::BoxFuture;

/// A bucket's logging target, as persisted by `PutBucketLogging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLoggingTarget {
    /// Bucket that receives the flushed log objects.
    pub target_bucket: String,
    /// Key prefix prepended to each flushed log object's name.
    pub target_prefix: String,
}

/// What the access-log pipeline needs from the storage engine: a way to read
/// a bucket's logging configuration, and a way to write a flushed log blob
/// back in as an object.
///
/// Implemented by the storage engine in `ruststack-s3-core`; kept as a trait
/// here so this crate never depends on the storage engine's concrete types.
pub trait LogSink: Send + Sync + 'static {
    /// Fetch the current logging configuration for `bucket`, if any.
    fn get_bucket_logging(&self, bucket: &str) -> BoxFuture<'_, Option<BucketLoggingTarget>>;

    /// Write `data` as an object named `key` in `bucket`.
    ///
    /// Errors are the sink's own (storage-engine) error, rendered to a
    /// string — the pipeline only ever logs failures, it never interprets
    /// them, so a typed error would be wasted plumbing here.
    fn put_log_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> BoxFuture<'_, Result<(), String>>;
}

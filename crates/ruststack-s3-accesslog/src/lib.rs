//! Per-bucket batched access-log pipeline.
//!
//! Mirrors the S3 server access-log feature: when a bucket has logging
//! enabled, every request against it (and other buckets, once wired by the
//! dispatcher) is formatted as a log line, buffered per target bucket, and
//! periodically flushed back into the storage engine as a `PutObject` of a
//! `.log` file under the target prefix.
//!
//! This crate never touches the storage engine directly — it is handed a
//! [`LogSink`] implementation at construction time, so the storage engine
//! stays ignorant of logging and the access-log pipeline stays ignorant of
//! how objects are actually stored.

mod cache;
mod config;
mod entry;
mod pipeline;
mod sink;

pub use config::AccessLogConfig;
pub use entry::{LogEntry, LogFields};
pub use pipeline::AccessLogPipeline;
pub use sink::{BucketLoggingTarget, LogSink};

//! Tunables for the access-log pipeline.

use std::time::Duration;

/// Configuration for the access-log pipeline.
///
/// All three fields have S3-server-realistic defaults and are overridable
/// from the binary's CLI/env surface.
#[derive(Debug, Clone, Copy)]
pub struct AccessLogConfig {
    /// How long a bucket's logging configuration is trusted before it is
    /// re-fetched from storage. Default 5 minutes.
    pub config_ttl: Duration,
    /// Number of buffered entries that triggers an immediate flush.
    /// Default 100.
    pub max_buffer_size: usize,
    /// Maximum time a buffer may go un-flushed. Default 1 hour.
    pub flush_interval: Duration,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            config_ttl: Duration::from_secs(5 * 60),
            max_buffer_size: 100,
            flush_interval: Duration::from_secs(60 * 60),
        }
    }
}

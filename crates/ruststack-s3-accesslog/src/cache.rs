//! TTL-cached per-bucket logging configuration lookups.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::sink::{BucketLoggingTarget, LogSink};

struct CacheEntry {
    config: Option<BucketLoggingTarget>,
    expires_at: Instant,
}

/// `bucket -> (config|none, expiresAt)`, shared behind a fine-grained lock.
///
/// A hit within expiry returns immediately; a miss or expired entry loads
/// from the sink and caches the result, including negative results (logging
/// disabled), so a bucket with no logging configured doesn't hit storage on
/// every request.
pub(crate) struct ConfigCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ConfigCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up `bucket`'s logging config, consulting the sink on a cache miss.
    pub(crate) async fn get_or_load<S: LogSink>(
        &self,
        bucket: &str,
        sink: &S,
    ) -> Option<BucketLoggingTarget> {
        if let Some(hit) = self.lookup_fresh(bucket) {
            return hit;
        }

        let loaded = sink.get_bucket_logging(bucket).await;
        self.entries.lock().insert(
            bucket.to_owned(),
            CacheEntry {
                config: loaded.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        loaded
    }

    fn lookup_fresh(&self, bucket: &str) -> Option<Option<BucketLoggingTarget>> {
        let entries = self.entries.lock();
        let entry = entries.get(bucket)?;
        if entry.expires_at > Instant::now() {
            Some(entry.config.clone())
        } else {
            None
        }
    }

    /// Drop any cached entry for `bucket`, forcing the next lookup to reload.
    pub(crate) fn invalidate(&self, bucket: &str) {
        self.entries.lock().remove(bucket);
    }
}

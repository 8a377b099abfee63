//! Batched, per-bucket access-log buffering and background flushing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::cache::ConfigCache;
use crate::config::AccessLogConfig;
use crate::entry::{LogEntry, LogFields};
use crate::sink::LogSink;

struct Buffer {
    target_bucket: String,
    target_prefix: String,
    entries: Vec<LogEntry>,
    last_flush: Instant,
}

/// The access-log pipeline: a TTL-cached config lookup, per-bucket batched
/// buffers, and a background ticker that flushes stale buffers.
///
/// Owns a background task for its lifetime; call [`AccessLogPipeline::close`]
/// to stop the ticker and synchronously flush everything outstanding.
pub struct AccessLogPipeline<S: LogSink> {
    sink: Arc<S>,
    config: AccessLogConfig,
    cache: ConfigCache,
    buffers: Mutex<HashMap<String, Buffer>>,
    shutdown: Arc<Notify>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl<S: LogSink> std::fmt::Debug for AccessLogPipeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessLogPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: LogSink> AccessLogPipeline<S> {
    /// Construct the pipeline and start its background flush ticker.
    #[must_use]
    pub fn new(sink: Arc<S>, config: AccessLogConfig) -> Arc<Self> {
        let pipeline = Arc::new(Self {
            sink,
            cache: ConfigCache::new(config.config_ttl),
            config,
            buffers: Mutex::new(HashMap::new()),
            shutdown: Arc::new(Notify::new()),
            ticker: Mutex::new(None),
        });

        let background = Arc::clone(&pipeline);
        let handle = tokio::spawn(async move { background.run_ticker().await });
        *pipeline.ticker.lock() = Some(handle);
        pipeline
    }

    async fn run_ticker(self: Arc<Self>) {
        let mut interval = tokio::time::interval(self.config.flush_interval);
        interval.tick().await; // first tick fires immediately; consume it
        loop {
            tokio::select! {
                _ = interval.tick() => self.flush_stale(),
                () = self.shutdown.notified() => break,
            }
        }
    }

    /// Buffer a log entry for `bucket`, flushing immediately if the buffer
    /// has reached its size or time threshold.
    ///
    /// If `bucket` has no logging configuration (cached or freshly loaded),
    /// the entry is silently dropped.
    pub async fn log(&self, bucket: &str, fields: LogFields) {
        let Some(target) = self.cache.get_or_load(bucket, self.sink.as_ref()).await else {
            return;
        };

        let entry = LogEntry::new(&fields);
        let should_flush = {
            let mut buffers = self.buffers.lock();
            let buffer = buffers.entry(bucket.to_owned()).or_insert_with(|| Buffer {
                target_bucket: target.target_bucket.clone(),
                target_prefix: target.target_prefix.clone(),
                entries: Vec::new(),
                last_flush: Instant::now(),
            });
            buffer.target_bucket = target.target_bucket;
            buffer.target_prefix = target.target_prefix;
            buffer.entries.push(entry);
            buffer.entries.len() >= self.config.max_buffer_size
                || buffer.last_flush.elapsed() >= self.config.flush_interval
        };

        if should_flush {
            self.flush_bucket_async(bucket);
        }
    }

    /// Force the next `log()` call for `bucket` to reload its configuration.
    pub fn invalidate_cache(&self, bucket: &str) {
        self.cache.invalidate(bucket);
    }

    fn drain(&self, bucket: &str) -> Option<(String, String, Vec<u8>)> {
        let mut buffers = self.buffers.lock();
        let buffer = buffers.get_mut(bucket)?;
        buffer.last_flush = Instant::now();
        if buffer.entries.is_empty() {
            return None;
        }
        let data = buffer
            .entries
            .drain(..)
            .flat_map(|entry| entry.as_str().as_bytes().to_vec())
            .collect();
        Some((buffer.target_bucket.clone(), buffer.target_prefix.clone(), data))
    }

    fn flush_bucket_async(&self, bucket: &str) {
        let Some((target_bucket, target_prefix, data)) = self.drain(bucket) else {
            return;
        };
        let key = log_object_key(&target_prefix, bucket);
        let sink = Arc::clone(&self.sink);
        let source_bucket = bucket.to_owned();
        tokio::spawn(async move {
            if let Err(error) = sink.put_log_object(&target_bucket, &key, data).await {
                tracing::warn!(
                    bucket = %source_bucket,
                    target_bucket = %target_bucket,
                    %error,
                    "access log flush failed"
                );
            }
        });
    }

    async fn flush_bucket_sync(&self, bucket: &str) {
        let Some((target_bucket, target_prefix, data)) = self.drain(bucket) else {
            return;
        };
        let key = log_object_key(&target_prefix, bucket);
        if let Err(error) = self.sink.put_log_object(&target_bucket, &key, data).await {
            tracing::warn!(
                bucket = %bucket,
                target_bucket = %target_bucket,
                %error,
                "access log flush failed"
            );
        }
    }

    fn flush_stale(&self) {
        let stale: Vec<String> = {
            let buffers = self.buffers.lock();
            buffers
                .iter()
                .filter(|(_, buf)| buf.last_flush.elapsed() >= self.config.flush_interval)
                .map(|(bucket, _)| bucket.clone())
                .collect()
        };
        for bucket in stale {
            self.flush_bucket_async(&bucket);
        }
    }

    /// Stop the background ticker and synchronously flush every outstanding
    /// buffer. Safe to call more than once.
    pub async fn close(&self) {
        self.shutdown.notify_one();
        if let Some(handle) = self.ticker.lock().take() {
            let _ = handle.await;
        }
        let buckets: Vec<String> = self.buffers.lock().keys().cloned().collect();
        for bucket in buckets {
            self.flush_bucket_sync(&bucket).await;
        }
    }
}

fn log_object_key(target_prefix: &str, source_bucket: &str) -> String {
    format!(
        "{target_prefix}{timestamp}-{source_bucket}.log",
        timestamp = Utc::now().format("%Y%m%dT%H%M%SZ"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BucketLoggingTarget;
    use futures::future::BoxFuture;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    struct RecordingSink {
        config: Option<BucketLoggingTarget>,
        writes: StdMutex<Vec<(String, String, usize)>>,
    }

    impl LogSink for RecordingSink {
        fn get_bucket_logging(&self, _bucket: &str) -> BoxFuture<'_, Option<BucketLoggingTarget>> {
            let config = self.config.clone();
            Box::pin(async move { config })
        }

        fn put_log_object(
            &self,
            bucket: &str,
            key: &str,
            data: Vec<u8>,
        ) -> BoxFuture<'_, Result<(), String>> {
            self.writes
                .lock()
                .unwrap()
                .push((bucket.to_owned(), key.to_owned(), data.len()));
            Box::pin(async { Ok(()) })
        }
    }

    fn fields(bucket: &str) -> LogFields {
        LogFields {
            bucket_owner: "owner".to_owned(),
            bucket: bucket.to_owned(),
            timestamp: Utc::now(),
            remote_ip: Some("127.0.0.1".to_owned()),
            requester: None,
            request_id: "req".to_owned(),
            operation: "REST.GET.OBJECT".to_owned(),
            key: Some("k".to_owned()),
            request_uri: "GET /k HTTP/1.1".to_owned(),
            http_status: 200,
            error_code: None,
            bytes_sent: Some(1),
            object_size: Some(1),
            total_time_ms: Some(1),
        }
    }

    #[tokio::test]
    async fn test_should_flush_on_size_threshold() {
        let sink = Arc::new(RecordingSink {
            config: Some(BucketLoggingTarget {
                target_bucket: "logs".to_owned(),
                target_prefix: "p/".to_owned(),
            }),
            writes: StdMutex::new(Vec::new()),
        });
        let pipeline = AccessLogPipeline::new(
            Arc::clone(&sink),
            AccessLogConfig {
                max_buffer_size: 3,
                flush_interval: Duration::from_secs(3600),
                config_ttl: Duration::from_secs(300),
            },
        );

        for _ in 0..3 {
            pipeline.log("b1", fields("b1")).await;
        }
        // flush is fire-and-forget; give the spawned task a turn to run.
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "logs");
        pipeline.close().await;
    }

    #[tokio::test]
    async fn test_should_drop_entries_without_logging_config() {
        let sink = Arc::new(RecordingSink {
            config: None,
            writes: StdMutex::new(Vec::new()),
        });
        let pipeline = AccessLogPipeline::new(Arc::clone(&sink), AccessLogConfig::default());
        pipeline.log("b1", fields("b1")).await;
        pipeline.close().await;
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_should_flush_outstanding_buffer_on_close() {
        let sink = Arc::new(RecordingSink {
            config: Some(BucketLoggingTarget {
                target_bucket: "logs".to_owned(),
                target_prefix: String::new(),
            }),
            writes: StdMutex::new(Vec::new()),
        });
        let pipeline = AccessLogPipeline::new(
            Arc::clone(&sink),
            AccessLogConfig {
                max_buffer_size: 10,
                flush_interval: Duration::from_secs(3600),
                config_ttl: Duration::from_secs(300),
            },
        );

        for _ in 0..9 {
            pipeline.log("b1", fields("b1")).await;
        }
        pipeline.close().await;

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
    }
}

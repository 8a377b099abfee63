//! S3 service configuration.
//!
//! Provides [`S3Config`] for configuring the RustStack S3 service. Configuration
//! values are loaded from environment variables, with CLI flags (parsed by
//! `apps/ruststack-s3-server`) taking precedence.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// S3 service configuration.
///
/// # Examples
///
/// ```
/// use ruststack_s3_core::config::S3Config;
///
/// let config = S3Config::default();
/// assert_eq!(config.listen_addr, "0.0.0.0:9000");
/// assert_eq!(config.region, "us-east-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    /// Bind address for the HTTP server (e.g. `"0.0.0.0:9000"`).
    #[builder(default = String::from("0.0.0.0:9000"))]
    pub listen_addr: String,

    /// Data directory the storage engine lays its content-addressed blobs under.
    #[builder(default = String::from("./data"))]
    pub data_dir: String,

    /// Default AWS region this service answers requests for.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Domain suffix that enables virtual-hosted-style bucket addressing
    /// (`bucket.<domain>`). `None` disables virtual-host routing entirely.
    #[builder(default)]
    pub virtual_hosting_domain: Option<String>,

    /// How long a bucket's logging configuration is cached before being
    /// re-read from the storage engine.
    #[builder(default = Duration::from_secs(300))]
    #[serde(with = "duration_secs")]
    pub accesslog_config_ttl: Duration,

    /// Maximum number of buffered log entries per bucket before a flush is
    /// triggered early.
    #[builder(default = 100)]
    pub accesslog_max_buffer_size: usize,

    /// Maximum time a bucket's log buffer is held before being flushed
    /// regardless of size.
    #[builder(default = Duration::from_secs(3600))]
    #[serde(with = "duration_secs")]
    pub accesslog_flush_interval: Duration,

    /// Log level filter string (e.g. `"info"`, `"debug"`), mirrored into
    /// `RUST_LOG` if unset.
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            listen_addr: String::from("0.0.0.0:9000"),
            data_dir: String::from("./data"),
            region: String::from("us-east-1"),
            virtual_hosting_domain: None,
            accesslog_config_ttl: Duration::from_secs(300),
            accesslog_max_buffer_size: 100,
            accesslog_flush_interval: Duration::from_secs(3600),
            log_level: String::from("info"),
        }
    }
}

impl S3Config {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `RUSTSTACK_S3_ADDR` | `0.0.0.0:9000` |
    /// | `RUSTSTACK_S3_DATA` | `./data` |
    /// | `RUSTSTACK_S3_REGION` | `us-east-1` |
    /// | `RUSTSTACK_S3_DOMAIN` | unset (virtual hosting disabled) |
    /// | `RUSTSTACK_S3_ACCESSLOG_CONFIG_TTL_SECS` | `300` |
    /// | `RUSTSTACK_S3_ACCESSLOG_MAX_BUFFER_SIZE` | `100` |
    /// | `RUSTSTACK_S3_ACCESSLOG_FLUSH_INTERVAL_SECS` | `3600` |
    /// | `RUST_LOG` | `info` |
    ///
    /// # Examples
    ///
    /// ```
    /// use ruststack_s3_core::config::S3Config;
    ///
    /// let config = S3Config::from_env();
    /// assert!(!config.listen_addr.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("RUSTSTACK_S3_ADDR") {
            config.listen_addr = v;
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_DATA") {
            config.data_dir = v;
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_DOMAIN") {
            config.virtual_hosting_domain = Some(v);
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_ACCESSLOG_CONFIG_TTL_SECS") {
            if let Ok(secs) = v.parse::<u64>() {
                config.accesslog_config_ttl = Duration::from_secs(secs);
            }
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_ACCESSLOG_MAX_BUFFER_SIZE") {
            if let Ok(n) = v.parse::<usize>() {
                config.accesslog_max_buffer_size = n;
            }
        }
        if let Ok(v) = std::env::var("RUSTSTACK_S3_ACCESSLOG_FLUSH_INTERVAL_SECS") {
            if let Ok(secs) = v.parse::<u64>() {
                config.accesslog_flush_interval = Duration::from_secs(secs);
            }
        }
        if let Ok(v) = std::env::var("RUST_LOG") {
            config.log_level = v;
        }

        config
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = S3Config::default();
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.virtual_hosting_domain, None);
        assert_eq!(config.accesslog_config_ttl, Duration::from_secs(300));
        assert_eq!(config.accesslog_max_buffer_size, 100);
        assert_eq!(config.accesslog_flush_interval, Duration::from_secs(3600));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_load_from_env() {
        let config = S3Config::from_env();
        assert!(!config.listen_addr.is_empty());
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = S3Config::builder()
            .listen_addr("127.0.0.1:9999".into())
            .data_dir("/tmp/data".into())
            .region("eu-west-1".into())
            .virtual_hosting_domain(Some("s3.example.test".to_owned()))
            .accesslog_config_ttl(Duration::from_secs(60))
            .accesslog_max_buffer_size(10)
            .accesslog_flush_interval(Duration::from_secs(120))
            .log_level("debug".into())
            .build();

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.data_dir, "/tmp/data");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.virtual_hosting_domain.as_deref(), Some("s3.example.test"));
        assert_eq!(config.accesslog_config_ttl, Duration::from_secs(60));
        assert_eq!(config.accesslog_max_buffer_size, 10);
        assert_eq!(config.accesslog_flush_interval, Duration::from_secs(120));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = S3Config::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("listenAddr"));
        assert!(json.contains("accesslogMaxBufferSize"));
    }
}

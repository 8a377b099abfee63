//! RustStack S3 Server - filesystem-backed S3-compatible object storage server.
//!
//! This binary wires the storage engine, access-log pipeline, SigV4 credential
//! provider, and hyper HTTP service together and runs the accept loop.
//!
//! # Usage
//!
//! ```text
//! ruststack-s3-server --addr 0.0.0.0:9000 --data ./data --credentials AKIAEXAMPLE:secret
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use ruststack_s3_accesslog::{AccessLogConfig, AccessLogPipeline};
use ruststack_s3_auth::{CredentialProvider, StaticCredentialProvider};
use ruststack_s3_core::{RustStackS3, S3Config, S3StorageEngine};
use ruststack_s3_http::service::{S3HttpConfig, S3HttpService};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Server version reported in logs.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filesystem-backed S3-compatible object storage server.
#[derive(Debug, Parser)]
#[command(name = "ruststack-s3-server", version = VERSION)]
struct Cli {
    /// Bind address for the HTTP server.
    #[arg(long, env = "RUSTSTACK_S3_ADDR")]
    addr: Option<String>,

    /// Directory the storage engine lays its content-addressed blobs under.
    #[arg(long, env = "RUSTSTACK_S3_DATA")]
    data: Option<String>,

    /// AWS region this service answers requests for.
    #[arg(long, env = "RUSTSTACK_S3_REGION")]
    region: Option<String>,

    /// Domain suffix enabling virtual-hosted-style bucket addressing.
    #[arg(long, env = "RUSTSTACK_S3_DOMAIN")]
    domain: Option<String>,

    /// Comma-separated `accessKey:secret` pairs. When unset, requests are
    /// accepted without signature verification.
    #[arg(long, env = "RUSTSTACK_S3_CREDENTIALS")]
    credentials: Option<String>,

    /// How long a bucket's logging configuration is cached, in seconds.
    #[arg(long)]
    accesslog_config_ttl: Option<u64>,

    /// Maximum number of buffered log entries per bucket before an early flush.
    #[arg(long)]
    accesslog_max_buffer_size: Option<usize>,

    /// Maximum time a bucket's log buffer is held before a forced flush, in seconds.
    #[arg(long)]
    accesslog_flush_interval: Option<u64>,

    /// Log level filter, overridden by `RUST_LOG` when set.
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `--log-level` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Apply CLI overrides on top of the environment-derived [`S3Config`].
fn resolve_config(cli: &Cli) -> S3Config {
    let mut config = S3Config::from_env();

    if let Some(addr) = &cli.addr {
        config.listen_addr = addr.clone();
    }
    if let Some(data) = &cli.data {
        config.data_dir = data.clone();
    }
    if let Some(region) = &cli.region {
        config.region = region.clone();
    }
    if cli.domain.is_some() {
        config.virtual_hosting_domain = cli.domain.clone();
    }
    if let Some(ttl) = cli.accesslog_config_ttl {
        config.accesslog_config_ttl = Duration::from_secs(ttl);
    }
    if let Some(max) = cli.accesslog_max_buffer_size {
        config.accesslog_max_buffer_size = max;
    }
    if let Some(interval) = cli.accesslog_flush_interval {
        config.accesslog_flush_interval = Duration::from_secs(interval);
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }

    config
}

/// Parse a `accessKey:secret[,accessKey:secret...]` flag into credential pairs.
fn parse_credentials(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (access_key, secret) = pair
                .split_once(':')
                .with_context(|| format!("invalid credential pair (want accessKey:secret): {pair}"))?;
            Ok((access_key.to_owned(), secret.to_owned()))
        })
        .collect()
}

/// Build a credential provider from the `--credentials` flag, if supplied.
fn build_credential_provider(cli: &Cli) -> Result<Option<Arc<dyn CredentialProvider>>> {
    let Some(raw) = &cli.credentials else {
        return Ok(None);
    };

    let pairs = parse_credentials(raw)?;
    info!(count = pairs.len(), "configured static credential provider");
    Ok(Some(Arc::new(StaticCredentialProvider::new(pairs))))
}

/// Build the [`S3HttpConfig`] from the resolved application config and CLI flags.
fn build_http_config(config: &S3Config, credential_provider: Option<Arc<dyn CredentialProvider>>) -> S3HttpConfig {
    S3HttpConfig {
        domain: config.virtual_hosting_domain.clone().unwrap_or_default(),
        virtual_hosting: config.virtual_hosting_domain.is_some(),
        skip_signature_validation: credential_provider.is_none(),
        region: config.region.clone(),
        credential_provider,
    }
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve<H: ruststack_s3_http::dispatch::S3Handler>(
    listener: TcpListener,
    service: S3HttpService<H>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    init_tracing(&config.log_level)?;

    info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir,
        region = %config.region,
        virtual_hosting_domain = ?config.virtual_hosting_domain,
        version = VERSION,
        "starting RustStack S3 Server",
    );

    let engine = S3StorageEngine::open(PathBuf::from(&config.data_dir))
        .with_context(|| format!("failed to open data directory: {}", config.data_dir))?;

    let access_log = AccessLogPipeline::new(
        Arc::new(engine.clone()),
        AccessLogConfig {
            config_ttl: config.accesslog_config_ttl,
            max_buffer_size: config.accesslog_max_buffer_size,
            flush_interval: config.accesslog_flush_interval,
        },
    );

    let provider = RustStackS3::new(engine, access_log, config.region.clone());

    let credential_provider = build_credential_provider(&cli)?;
    if credential_provider.is_none() {
        warn!("no credentials configured; all requests are accepted without signature verification");
    }
    let http_config = build_http_config(&config, credential_provider);
    let service = S3HttpService::new(provider, http_config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.listen_addr))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "listening for connections");

    serve(listener, service).await
}

//! Content-addressed, filesystem-backed S3 storage engine for RustStack.
//!
//! This crate owns the on-disk object model (§5): buckets and objects are
//! laid out under a data directory, object payloads are deduplicated by
//! SHA-256 digest, and metadata lives alongside the content-addressed blobs.
//! [`provider::RustStackS3`] is the seam that implements
//! [`ruststack_s3_http::dispatch::S3Handler`] over the storage engine,
//! bridging HTTP request/response (de)serialization to the engine's async API.
//!
//! # Architecture
//!
//! ```text
//! ruststack-s3-http (routing, request/response typing, auth)
//!        |
//!        v
//! RustStackS3 (S3Handler impl)
//!        |
//!        v
//!   S3StorageEngine (engine.rs)
//!        |
//!        v
//!   content-addressed layout on disk (layout.rs, refcount.rs)
//! ```

pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod layout;
pub mod meta;
pub mod provider;
pub mod refcount;
pub mod validation;

pub use config::S3Config;
pub use engine::S3StorageEngine;
pub use error::{S3ServiceError, S3ServiceResult};
pub use provider::RustStackS3;

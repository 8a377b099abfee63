//! Core types and shared leaf infrastructure for RustStack.
//!
//! This crate provides the foundational building blocks shared across the
//! RustStack S3 service: a generic error type and the path sanitizer that
//! runs once at request entry before routing or storage ever sees a path.

mod error;
pub mod path;

pub use error::{RustStackError, RustStackResult};

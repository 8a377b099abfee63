//! S3-specific error types.
//!
//! Defines [`S3ServiceError`], the storage engine's own error enum. Every
//! fallible storage/validation operation in this crate returns it; the
//! dispatcher-facing boundary (`apps/ruststack-s3-server`) converts it into
//! the wire-level [`ruststack_s3_model::error::S3Error`] via [`From`], which
//! is the single seam where a domain error picks up an S3 error code, an
//! HTTP status, and a rendered message.
//!
//! # Examples
//!
//! ```
//! use ruststack_s3_core::error::S3ServiceError;
//! use ruststack_s3_model::error::S3ErrorCode;
//!
//! let err = S3ServiceError::NoSuchBucket {
//!     bucket: "my-bucket".to_owned(),
//! };
//! let s3_err: ruststack_s3_model::error::S3Error = err.into();
//! assert_eq!(s3_err.code, S3ErrorCode::NoSuchBucket);
//! ```

use ruststack_s3_model::error::{S3Error, S3ErrorCode};

/// Storage engine error type.
///
/// Covers exactly the error kinds the storage engine (4.B) can produce, per
/// the taxonomy in §7 of the spec. Auth errors (`SignatureDoesNotMatch`,
/// `InvalidAccessKeyId`, presigned expiry, chunk-signature mismatch) and path
/// errors (`InvalidURI`) are produced by `ruststack-s3-auth` and the HTTP
/// dispatcher respectively, not here.
#[derive(Debug, thiserror::Error)]
pub enum S3ServiceError {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The requested bucket name is already in use.
    #[error("The requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The bucket already exists and is owned by the caller.
    #[error(
        "Your previous request to create the named bucket succeeded and you already own it: {bucket}"
    )]
    BucketAlreadyOwnedByYou {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The specified bucket name is not valid.
    #[error("Invalid bucket name: {name}: {reason}")]
    InvalidBucketName {
        /// The invalid bucket name.
        name: String,
        /// The reason the name was rejected.
        reason: String,
    },

    /// The specified key does not exist.
    #[error("The specified key does not exist: {bucket}/{key}")]
    NoSuchKey {
        /// The bucket the key was looked up in.
        bucket: String,
        /// The key that was not found.
        key: String,
    },

    /// An argument provided is invalid (includes invalid object keys).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// The specified multipart upload does not exist.
    #[error("The specified upload does not exist: {upload_id}")]
    NoSuchUpload {
        /// The upload ID that was not found.
        upload_id: String,
    },

    /// One or more of the specified parts could not be found, or an uploaded
    /// part's ETag did not match the one named in `CompleteMultipartUpload`.
    #[error("One or more of the specified parts could not be found: {message}")]
    InvalidPart {
        /// Description of which part failed to match.
        message: String,
    },

    /// The list of parts in `CompleteMultipartUpload` was not in ascending order.
    #[error("The list of parts was not in ascending order")]
    InvalidPartOrder,

    /// The computed SHA-256 of the payload did not match the expected digest.
    #[error("The SHA-256 you specified did not match what we received")]
    BadDigest,

    /// The requested byte range is not satisfiable.
    #[error("The requested range is not satisfiable")]
    InvalidRange,

    /// A conditional header (`If-Match` / `If-None-Match` / `If-(Un)Modified-Since`)
    /// precondition was not met.
    #[error("At least one of the preconditions you specified did not hold")]
    PreconditionFailed,

    /// Filesystem I/O failure underneath the storage engine.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other internal failure (serialization, invariant violation).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl S3ServiceError {
    /// Convert this error into a [`ruststack_s3_model::error::S3Error`].
    ///
    /// Equivalent to `S3Error::from(self)`, available as a method for use in
    /// chained calls (`store.get_object(..).await.map_err(S3ServiceError::into_s3_error)`).
    #[must_use]
    pub fn into_s3_error(self) -> S3Error {
        S3Error::from(self)
    }
}

impl From<S3ServiceError> for S3Error {
    fn from(err: S3ServiceError) -> Self {
        match err {
            S3ServiceError::NoSuchBucket { bucket } => S3Error::no_such_bucket(bucket),
            S3ServiceError::BucketAlreadyExists { bucket } => S3Error::bucket_already_exists(bucket),
            S3ServiceError::BucketAlreadyOwnedByYou { bucket } => {
                S3Error::bucket_already_owned_by_you(bucket)
            }
            S3ServiceError::InvalidBucketName { name, reason } => {
                S3Error::with_message(S3ErrorCode::InvalidBucketName, format!("{name}: {reason}"))
            }
            S3ServiceError::NoSuchKey { bucket, key } => {
                S3Error::no_such_key(format!("{bucket}/{key}"))
            }
            S3ServiceError::InvalidArgument { message } => S3Error::invalid_argument(message),
            S3ServiceError::NoSuchUpload { upload_id } => S3Error::no_such_upload(upload_id),
            S3ServiceError::InvalidPart { message } => S3Error::invalid_part(message),
            S3ServiceError::InvalidPartOrder => {
                S3Error::new(S3ErrorCode::InvalidPartOrder)
            }
            S3ServiceError::BadDigest => S3Error::new(S3ErrorCode::BadDigest),
            S3ServiceError::InvalidRange => S3Error::invalid_range(""),
            S3ServiceError::PreconditionFailed => S3Error::precondition_failed(""),
            S3ServiceError::Io(e) => S3Error::internal_error(e.to_string()),
            S3ServiceError::Internal(e) => S3Error::internal_error(e.to_string()),
        }
    }
}

/// Convenience result type for storage engine operations.
pub type S3ServiceResult<T> = Result<T, S3ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_convert_no_such_bucket_to_s3_error() {
        let err = S3ServiceError::NoSuchBucket {
            bucket: "my-bucket".to_owned(),
        };
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::NoSuchBucket);
        assert!(s3_err.resource.as_deref() == Some("my-bucket"));
    }

    #[test]
    fn test_should_convert_no_such_key_to_s3_error() {
        let err = S3ServiceError::NoSuchKey {
            bucket: "b".to_owned(),
            key: "path/to/obj".to_owned(),
        };
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::NoSuchKey);
    }

    #[test]
    fn test_should_convert_bucket_already_exists_to_s3_error() {
        let err = S3ServiceError::BucketAlreadyExists {
            bucket: "taken".to_owned(),
        };
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::BucketAlreadyExists);
    }

    #[test]
    fn test_should_convert_invalid_bucket_name_to_s3_error() {
        let err = S3ServiceError::InvalidBucketName {
            name: "BAD".to_owned(),
            reason: "uppercase".to_owned(),
        };
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::InvalidBucketName);
    }

    #[test]
    fn test_should_convert_no_such_upload_to_s3_error() {
        let err = S3ServiceError::NoSuchUpload {
            upload_id: "abc123".to_owned(),
        };
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::NoSuchUpload);
    }

    #[test]
    fn test_should_convert_precondition_failed_to_s3_error() {
        let err = S3ServiceError::PreconditionFailed;
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::PreconditionFailed);
    }

    #[test]
    fn test_should_convert_bad_digest_to_s3_error() {
        let err = S3ServiceError::BadDigest;
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::BadDigest);
    }

    #[test]
    fn test_should_convert_io_error_to_internal_error() {
        let io_err = std::io::Error::other("disk full");
        let err: S3ServiceError = io_err.into();
        let s3_err: S3Error = err.into();
        assert_eq!(s3_err.code, S3ErrorCode::InternalError);
    }

    #[test]
    fn test_should_use_into_s3_error_method() {
        let err = S3ServiceError::InvalidRange;
        let s3_err = err.into_s3_error();
        assert_eq!(s3_err.code, S3ErrorCode::InvalidRange);
    }
}

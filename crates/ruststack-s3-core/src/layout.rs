//! Filesystem layout for the storage engine (§6 "Persisted state layout").
//!
//! ```text
//! <base>/
//!   <bucket>/
//!     .logging                   <- JSON logging config (optional)
//!     <key-path>/                <- one directory per object key
//!       meta                     <- metadata record
//!   .uploads/<bucket>/<key>/<uploadID>/
//!     meta
//!     <partNumber>-<etag>        <- each uploaded part
//!   .objects/<hh>/<hh>/<digest>  <- CAS blobs, sharded by digest prefix
//!   .refcounts                   <- digest -> refcount map
//! ```

use std::path::{Path, PathBuf};

/// Payloads at or below this many bytes are inlined in the object's metadata
/// record instead of being written to the CAS area (§4.B.4).
pub const INLINE_THRESHOLD: usize = 256;

/// Name of the metadata file inside an object or upload directory.
pub const META_FILE_NAME: &str = "meta";

/// Name of the optional per-bucket logging-configuration sidecar file.
pub const LOGGING_FILE_NAME: &str = ".logging";

/// Root directory of a bucket.
#[must_use]
pub fn bucket_dir(base: &Path, bucket: &str) -> PathBuf {
    base.join(bucket)
}

/// Path to a bucket's logging-configuration sidecar file.
#[must_use]
pub fn bucket_logging_path(base: &Path, bucket: &str) -> PathBuf {
    bucket_dir(base, bucket).join(LOGGING_FILE_NAME)
}

/// Directory that owns an object's metadata record. The key's `/`-separated
/// segments become nested directories.
#[must_use]
pub fn object_dir(base: &Path, bucket: &str, key: &str) -> PathBuf {
    bucket_dir(base, bucket).join(key)
}

/// Path to an object's metadata record.
#[must_use]
pub fn object_meta_path(base: &Path, bucket: &str, key: &str) -> PathBuf {
    object_dir(base, bucket, key).join(META_FILE_NAME)
}

/// Path to a CAS blob, sharded by the first two and next two hex characters
/// of its digest.
///
/// # Panics
///
/// Panics if `digest_hex` is shorter than 4 characters.
#[must_use]
pub fn cas_blob_path(base: &Path, digest_hex: &str) -> PathBuf {
    base.join(".objects")
        .join(&digest_hex[0..2])
        .join(&digest_hex[2..4])
        .join(digest_hex)
}

/// Root directory for all in-progress multipart uploads.
#[must_use]
pub fn uploads_root(base: &Path) -> PathBuf {
    base.join(".uploads")
}

/// Directory owning one multipart upload's state.
#[must_use]
pub fn upload_dir(base: &Path, bucket: &str, key: &str, upload_id: &str) -> PathBuf {
    uploads_root(base).join(bucket).join(key).join(upload_id)
}

/// Path to an upload's metadata record.
#[must_use]
pub fn upload_meta_path(base: &Path, bucket: &str, key: &str, upload_id: &str) -> PathBuf {
    upload_dir(base, bucket, key, upload_id).join(META_FILE_NAME)
}

/// Path to a part file within an upload directory, named `<partNumber>-<etag>`.
#[must_use]
pub fn upload_part_path(upload_dir: &Path, part_number: u32, etag: &str) -> PathBuf {
    upload_dir.join(format!("{part_number}-{etag}"))
}

/// Path to the refcount table.
#[must_use]
pub fn refcounts_path(base: &Path) -> PathBuf {
    base.join(".refcounts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_nest_object_dir_by_key_segments() {
        let base = Path::new("/data");
        let dir = object_dir(base, "b", "photos/2024/img.jpg");
        assert_eq!(dir, PathBuf::from("/data/b/photos/2024/img.jpg"));
    }

    #[test]
    fn test_should_shard_cas_blob_path_by_digest_prefix() {
        let base = Path::new("/data");
        let digest = "abcd1234";
        let path = cas_blob_path(base, digest);
        assert_eq!(path, PathBuf::from("/data/.objects/ab/cd/abcd1234"));
    }

    #[test]
    fn test_should_nest_upload_dir_by_bucket_key_and_upload_id() {
        let base = Path::new("/data");
        let dir = upload_dir(base, "b", "k", "u1");
        assert_eq!(dir, PathBuf::from("/data/.uploads/b/k/u1"));
    }

    #[test]
    fn test_should_name_upload_part_by_number_and_etag() {
        let dir = PathBuf::from("/data/.uploads/b/k/u1");
        let path = upload_part_path(&dir, 3, "etagvalue");
        assert_eq!(path, PathBuf::from("/data/.uploads/b/k/u1/3-etagvalue"));
    }
}

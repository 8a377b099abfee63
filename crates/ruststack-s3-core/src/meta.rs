//! Object and multipart-upload metadata records (§4.B, §6).
//!
//! Every object is represented on disk by a single JSON `meta` file; the
//! payload itself lives either inline in that file (small objects, §4.B.4) or
//! in the CAS area keyed by digest. This mirrors the donor's `ObjectMetadata`
//! shape but drops the fields (ACLs, storage class, SSE, lock) this service
//! doesn't implement.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted metadata for a single object version.
///
/// `digest` is always present, even when the payload is inlined, so that
/// [`RefcountStore`](crate::refcount::RefcountStore) lookups and
/// `RenameObject`/`CopyObject` digest comparisons never need to special-case
/// inlined objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectMetaRecord {
    /// `Content-Type` supplied at upload time, or a default.
    pub content_type: String,
    /// User-supplied `x-amz-meta-*` headers, keys without the prefix.
    pub user_metadata: HashMap<String, String>,
    /// Payload size in bytes.
    pub size: u64,
    /// ETag (URL-safe base64 of the SHA-256 digest).
    pub etag: String,
    /// Hex-encoded SHA-256 digest of the payload.
    pub digest: String,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub mtime_unix_ms: u64,
    /// Payload bytes when the object is small enough to inline
    /// (`size <= INLINE_THRESHOLD`); `None` means the payload lives in the
    /// CAS area under `digest`.
    pub inline_data: Option<Vec<u8>>,
}

impl ObjectMetaRecord {
    /// Read and deserialize a metadata record from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or doesn't contain valid JSON.
    pub fn read_from(path: &Path) -> io::Result<Self> {
        let data = std::fs::read(path)?;
        serde_json::from_slice(&data).map_err(io::Error::other)
    }

    /// Atomically write this record to `path` via a temp-file-then-rename.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing, the write fails,
    /// or the rename fails.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let data = serde_json::to_vec(self).map_err(io::Error::other)?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &data)?;
        std::fs::rename(&tmp, path)
    }
}

/// Persisted state for a single multipart upload (§4.B.5).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipartUploadMetaRecord {
    /// Bucket the completed object will live in.
    pub bucket: String,
    /// Key the completed object will be stored under.
    pub key: String,
    /// Upload ID assigned at initiation.
    pub upload_id: String,
    /// `Content-Type` that will be applied to the completed object.
    pub content_type: String,
    /// User-supplied `x-amz-meta-*` headers that will be applied to the
    /// completed object.
    pub user_metadata: HashMap<String, String>,
    /// Creation time, milliseconds since the Unix epoch.
    pub initiated_unix_ms: u64,
}

/// Persisted state for a single uploaded part (§4.B.5).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedPartRecord {
    /// 1-based part number.
    pub part_number: u32,
    /// ETag of this part's bytes (content-hash based, like any object ETag).
    pub etag: String,
    /// Part size in bytes.
    pub size: u64,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub mtime_unix_ms: u64,
}

impl MultipartUploadMetaRecord {
    /// Read and deserialize an upload metadata record from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or doesn't contain valid JSON.
    pub fn read_from(path: &Path) -> io::Result<Self> {
        let data = std::fs::read(path)?;
        serde_json::from_slice(&data).map_err(io::Error::other)
    }

    /// Atomically write this record to `path` via a temp-file-then-rename.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing, the write fails,
    /// or the rename fails.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let data = serde_json::to_vec(self).map_err(io::Error::other)?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &data)?;
        std::fs::rename(&tmp, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ObjectMetaRecord {
        ObjectMetaRecord {
            content_type: "text/plain".to_owned(),
            user_metadata: HashMap::from([("color".to_owned(), "blue".to_owned())]),
            size: 5,
            etag: "etagvalue".to_owned(),
            digest: "abc123".to_owned(),
            mtime_unix_ms: 1_700_000_000_000,
            inline_data: Some(b"hello".to_vec()),
        }
    }

    #[test]
    fn test_should_round_trip_object_meta_through_disk() {
        let dir = tempfile::tempdir().expect("test tempdir");
        let path = dir.path().join("meta");
        let record = sample_record();
        record.write_to(&path).expect("test write");

        let loaded = ObjectMetaRecord::read_from(&path).expect("test read");
        assert_eq!(loaded.digest, record.digest);
        assert_eq!(loaded.etag, record.etag);
        assert_eq!(loaded.inline_data, record.inline_data);
        assert_eq!(loaded.user_metadata.get("color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_should_round_trip_multipart_upload_meta() {
        let dir = tempfile::tempdir().expect("test tempdir");
        let path = dir.path().join("meta");
        let record = MultipartUploadMetaRecord {
            bucket: "b".to_owned(),
            key: "k".to_owned(),
            upload_id: "u1".to_owned(),
            content_type: "application/octet-stream".to_owned(),
            user_metadata: HashMap::new(),
            initiated_unix_ms: 1_700_000_000_000,
        };
        record.write_to(&path).expect("test write");

        let loaded = MultipartUploadMetaRecord::read_from(&path).expect("test read");
        assert_eq!(loaded.upload_id, "u1");
        assert_eq!(loaded.bucket, "b");
    }

    #[test]
    fn test_read_missing_file_errors() {
        let dir = tempfile::tempdir().expect("test tempdir");
        let path = dir.path().join("missing");
        assert!(ObjectMetaRecord::read_from(&path).is_err());
    }
}

//! The storage engine (§4.B): buckets, objects, multipart uploads and
//! per-bucket logging configuration, all persisted under a single base
//! directory per [`crate::layout`].
//!
//! All filesystem work runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], generalized from the donor's in-memory
//! `InMemoryStorage` shape to a real content-addressed filesystem backend.
//! Per-`(bucket, key)` critical sections are held with a `DashMap` of
//! `tokio::sync::Mutex`es, following the donor's `DashMap`-backed state
//! convention, so the read-modify-write around a metadata rename and its
//! refcount change is never split across two concurrent writers.

use std::collections::HashMap;
use std::io;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use futures::future::BoxFuture;
use ruststack_s3_accesslog::{BucketLoggingTarget, LogSink};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex as AsyncMutex;
use tokio::task;
use uuid::Uuid;

use crate::digest::{etag_from_hex, hex_digest};
use crate::error::{S3ServiceError, S3ServiceResult};
use crate::layout;
use crate::meta::{MultipartUploadMetaRecord, ObjectMetaRecord};
use crate::refcount::RefcountStore;
use crate::validation::{validate_bucket_name, validate_metadata, validate_object_key};

// ---------------------------------------------------------------------------
// Domain types returned to callers
// ---------------------------------------------------------------------------

/// A bucket as reported by `ListBuckets`.
#[derive(Debug, Clone)]
pub struct BucketRecord {
    /// Bucket name.
    pub name: String,
    /// Creation time, milliseconds since the Unix epoch (best-effort; falls
    /// back to the directory's modification time on platforms that don't
    /// report creation times).
    pub created_unix_ms: u64,
}

/// One page of `ListBuckets` results.
#[derive(Debug, Clone)]
pub struct ListBucketsPage {
    /// Buckets on this page, in lexicographic order.
    pub buckets: Vec<BucketRecord>,
    /// Present when the listing was truncated; equals the last bucket name returned.
    pub next_continuation_token: Option<String>,
}

/// Result of a successful `PutObject`.
#[derive(Debug, Clone)]
pub struct PutObjectResult {
    /// ETag of the stored payload.
    pub etag: String,
    /// Payload size in bytes.
    pub size: u64,
}

/// An inclusive byte range, as parsed from an HTTP `Range` header.
#[derive(Debug, Clone, Copy)]
pub struct ByteRange {
    /// First byte to return, inclusive.
    pub start: u64,
    /// Last byte to return, inclusive.
    pub end: u64,
}

/// Result of a successful `GetObject` (or the source-reading half of
/// `UploadPartCopy`).
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// The returned bytes: the whole object, or the requested range of it.
    pub data: Bytes,
    /// Size of the full object, regardless of any range applied.
    pub total_size: u64,
    /// `Content-Type` stored with the object.
    pub content_type: String,
    /// ETag of the full object.
    pub etag: String,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub mtime_unix_ms: u64,
    /// User-supplied `x-amz-meta-*` metadata.
    pub user_metadata: HashMap<String, String>,
    /// The range actually applied, if any.
    pub range: Option<ByteRange>,
}

/// One object entry in a `ListObjects`/`ListObjectsV2` page.
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    /// Full object key.
    pub key: String,
    /// Payload size in bytes.
    pub size: u64,
    /// ETag.
    pub etag: String,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub mtime_unix_ms: u64,
}

/// One page of `ListObjects`/`ListObjectsV2` results.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsPage {
    /// Matching objects not collapsed under a common prefix.
    pub objects: Vec<ObjectEntry>,
    /// Common prefixes collapsed by the delimiter.
    pub common_prefixes: Vec<String>,
    /// Whether more results exist beyond this page.
    pub is_truncated: bool,
    /// Key to resume listing from (last key observed), if truncated.
    pub next_marker: Option<String>,
}

/// Result of a successful `CopyObject` or `RenameObject`-onto-destination.
#[derive(Debug, Clone)]
pub struct CopyObjectResult {
    /// ETag of the destination object after the copy.
    pub etag: String,
    /// Last-modified time of the destination object, milliseconds since the epoch.
    pub mtime_unix_ms: u64,
}

/// Result of a successful `UploadPart` or `UploadPartCopy`.
#[derive(Debug, Clone)]
pub struct UploadPartResult {
    /// ETag of the uploaded part.
    pub etag: String,
    /// Part size in bytes.
    pub size: u64,
}

/// One entry supplied to `CompleteMultipartUpload`, naming a previously
/// uploaded part and the ETag the caller believes it has.
#[derive(Debug, Clone)]
pub struct CompletedPartInput {
    /// 1-based part number.
    pub part_number: u32,
    /// ETag the caller recorded when the part was uploaded.
    pub etag: String,
}

/// Result of a successful `CompleteMultipartUpload`.
#[derive(Debug, Clone)]
pub struct CompleteMultipartUploadResult {
    /// ETag of the assembled object.
    pub etag: String,
    /// Size of the assembled object in bytes.
    pub size: u64,
}

/// One multipart upload in a `ListMultipartUploads` page.
#[derive(Debug, Clone)]
pub struct MultipartUploadSummary {
    /// Object key the upload targets.
    pub key: String,
    /// Upload ID.
    pub upload_id: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub initiated_unix_ms: u64,
}

/// One page of `ListMultipartUploads` results.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsPage {
    /// Uploads on this page, ordered by `(key, uploadId)`.
    pub uploads: Vec<MultipartUploadSummary>,
    /// Whether more uploads exist beyond this page.
    pub is_truncated: bool,
}

/// One part in a `ListParts` page.
#[derive(Debug, Clone)]
pub struct PartSummary {
    /// 1-based part number.
    pub part_number: u32,
    /// ETag of the part.
    pub etag: String,
    /// Part size in bytes.
    pub size: u64,
    /// Last-modified time, milliseconds since the Unix epoch.
    pub mtime_unix_ms: u64,
}

/// One page of `ListParts` results.
#[derive(Debug, Clone, Default)]
pub struct ListPartsPage {
    /// Parts on this page, ordered by part number.
    pub parts: Vec<PartSummary>,
    /// Whether more parts exist beyond this page.
    pub is_truncated: bool,
    /// Part number to resume from, if truncated.
    pub next_part_number_marker: Option<u32>,
}

/// Per-bucket logging configuration, as persisted by `PutBucketLogging`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketLoggingConfig {
    /// Bucket that receives flushed log objects.
    pub target_bucket: String,
    /// Key prefix prepended to each flushed log object's name.
    pub target_prefix: String,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Filesystem-backed, content-addressed S3 storage engine.
///
/// Cheaply cloneable: every field is an `Arc`, so handing a clone to the
/// access-log pipeline or a background task shares the same on-disk state.
#[derive(Clone)]
pub struct S3StorageEngine {
    base: Arc<PathBuf>,
    refcounts: Arc<RefcountStore>,
    bucket_locks: Arc<DashMap<String, Arc<AsyncMutex<()>>>>,
    object_locks: Arc<DashMap<(String, String), Arc<AsyncMutex<()>>>>,
}

impl std::fmt::Debug for S3StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3StorageEngine").field("base", &self.base).finish()
    }
}

impl S3StorageEngine {
    /// Open (creating if necessary) the storage engine rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` can't be created or the refcount sidecar
    /// exists but can't be read.
    pub fn open(base: PathBuf) -> io::Result<Self> {
        std::fs::create_dir_all(&base)?;
        let refcounts = RefcountStore::load(layout::refcounts_path(&base))?;
        Ok(Self {
            base: Arc::new(base),
            refcounts: Arc::new(refcounts),
            bucket_locks: Arc::new(DashMap::new()),
            object_locks: Arc::new(DashMap::new()),
        })
    }

    fn bucket_lock(&self, bucket: &str) -> Arc<AsyncMutex<()>> {
        Arc::clone(
            self.bucket_locks
                .entry(bucket.to_owned())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .value(),
        )
    }

    fn object_lock(&self, bucket: &str, key: &str) -> Arc<AsyncMutex<()>> {
        Arc::clone(
            self.object_locks
                .entry((bucket.to_owned(), key.to_owned()))
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .value(),
        )
    }

    async fn spawn<F, T>(f: F) -> S3ServiceResult<T>
    where
        F: FnOnce() -> S3ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        task::spawn_blocking(f)
            .await
            .map_err(|e| S3ServiceError::Internal(anyhow::anyhow!("blocking task panicked: {e}")))?
    }

    // -- Buckets -------------------------------------------------------

    /// `CreateBucket(name)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::InvalidBucketName`] or
    /// [`S3ServiceError::BucketAlreadyExists`].
    pub async fn create_bucket(&self, name: &str) -> S3ServiceResult<()> {
        validate_bucket_name(name)?;
        let _guard = self.bucket_lock(name).lock().await;
        let base = Arc::clone(&self.base);
        let name = name.to_owned();
        Self::spawn(move || blocking_create_bucket(&base, &name)).await
    }

    /// `DeleteBucket(name)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `name` doesn't exist.
    pub async fn delete_bucket(&self, name: &str) -> S3ServiceResult<()> {
        let _guard = self.bucket_lock(name).lock().await;
        let base = Arc::clone(&self.base);
        let name = name.to_owned();
        Self::spawn(move || blocking_delete_bucket(&base, &name)).await
    }

    /// `HeadBucket` / `BucketExists`.
    pub async fn bucket_exists(&self, name: &str) -> bool {
        let base = Arc::clone(&self.base);
        let name = name.to_owned();
        task::spawn_blocking(move || blocking_bucket_exists(&base, &name))
            .await
            .unwrap_or(false)
    }

    /// `HeadBucket(name)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `name` doesn't exist.
    pub async fn head_bucket(&self, name: &str) -> S3ServiceResult<()> {
        if self.bucket_exists(name).await {
            Ok(())
        } else {
            Err(S3ServiceError::NoSuchBucket { bucket: name.to_owned() })
        }
    }

    /// `ListBuckets(prefix, maxBuckets, continuationToken)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory can't be read.
    pub async fn list_buckets(
        &self,
        prefix: &str,
        max_buckets: u32,
        continuation_token: &str,
    ) -> S3ServiceResult<ListBucketsPage> {
        let base = Arc::clone(&self.base);
        let prefix = prefix.to_owned();
        let continuation_token = continuation_token.to_owned();
        Self::spawn(move || blocking_list_buckets(&base, &prefix, max_buckets, &continuation_token)).await
    }

    // -- Objects ---------------------------------------------------------

    /// `PutObject(bucket, key, data, contentType, expectedSHA256?)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::InvalidArgument`] for a malformed key or
    /// oversized metadata, [`S3ServiceError::NoSuchBucket`] if `bucket`
    /// doesn't exist, or [`S3ServiceError::BadDigest`] on a checksum mismatch.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: String,
        user_metadata: HashMap<String, String>,
        expected_sha256: Option<String>,
    ) -> S3ServiceResult<PutObjectResult> {
        validate_object_key(key)?;
        validate_metadata(&user_metadata)?;
        let _guard = self.object_lock(bucket, key).lock().await;
        let base = Arc::clone(&self.base);
        let refcounts = Arc::clone(&self.refcounts);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        Self::spawn(move || {
            blocking_put_object(
                &base,
                &refcounts,
                &bucket,
                &key,
                &data,
                content_type,
                user_metadata,
                expected_sha256,
            )
        })
        .await
    }

    /// `GetObject(bucket, key, range?)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchKey`] if the object doesn't exist, or
    /// [`S3ServiceError::InvalidRange`] for an unsatisfiable range.
    pub async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        range: Option<ByteRange>,
    ) -> S3ServiceResult<ObjectData> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        Self::spawn(move || blocking_get_object(&base, &bucket, &key, range)).await
    }

    /// `DeleteObject(bucket, key)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchKey`] if the object doesn't exist.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> S3ServiceResult<()> {
        let _guard = self.object_lock(bucket, key).lock().await;
        let base = Arc::clone(&self.base);
        let refcounts = Arc::clone(&self.refcounts);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        Self::spawn(move || blocking_delete_object(&base, &refcounts, &bucket, &key)).await
    }

    /// `ListObjects(bucket, prefix, delimiter, marker, maxKeys)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `bucket` doesn't exist.
    pub async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: &str,
        marker: &str,
        max_keys: u32,
    ) -> S3ServiceResult<ListObjectsPage> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let prefix = prefix.to_owned();
        let delimiter = delimiter.to_owned();
        let marker = marker.to_owned();
        Self::spawn(move || blocking_list_objects(&base, &bucket, &prefix, &delimiter, &marker, max_keys)).await
    }

    /// `CopyObject(src, dst)`. Never rehashes; reuses the source digest.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchKey`] if the source doesn't exist, or
    /// [`S3ServiceError::NoSuchBucket`] if the destination bucket doesn't.
    #[allow(clippy::too_many_arguments)]
    pub async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
        content_type: Option<String>,
        user_metadata: Option<HashMap<String, String>>,
    ) -> S3ServiceResult<CopyObjectResult> {
        validate_object_key(src_key)?;
        validate_object_key(dst_key)?;
        let _guard = self.object_lock(dst_bucket, dst_key).lock().await;
        let base = Arc::clone(&self.base);
        let refcounts = Arc::clone(&self.refcounts);
        let src_bucket = src_bucket.to_owned();
        let src_key = src_key.to_owned();
        let dst_bucket = dst_bucket.to_owned();
        let dst_key = dst_key.to_owned();
        Self::spawn(move || {
            blocking_copy_object(
                &base,
                &refcounts,
                &src_bucket,
                &src_key,
                &dst_bucket,
                &dst_key,
                content_type,
                user_metadata,
            )
        })
        .await
    }

    /// `RenameObject(bucket, srcKey, dstKey)`. Atomic move within one bucket.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchKey`] if the source doesn't exist.
    pub async fn rename_object(&self, bucket: &str, src_key: &str, dst_key: &str) -> S3ServiceResult<()> {
        validate_object_key(src_key)?;
        validate_object_key(dst_key)?;

        // Lock both keys in a fixed order so two renames that swap a pair of
        // keys can't deadlock against each other.
        let (first_key, second_key) = if src_key <= dst_key { (src_key, dst_key) } else { (dst_key, src_key) };
        let first = self.object_lock(bucket, first_key);
        let second = self.object_lock(bucket, second_key);
        let (_first_guard, _second_guard) = if first_key == second_key {
            (first.lock_owned().await, None)
        } else {
            let f = first.lock_owned().await;
            let s = second.lock_owned().await;
            (f, Some(s))
        };

        let base = Arc::clone(&self.base);
        let refcounts = Arc::clone(&self.refcounts);
        let bucket = bucket.to_owned();
        let src_key = src_key.to_owned();
        let dst_key = dst_key.to_owned();
        Self::spawn(move || blocking_rename_object(&base, &refcounts, &bucket, &src_key, &dst_key)).await
    }

    // -- Multipart uploads -------------------------------------------------

    /// `InitiateMultipartUpload(bucket, key, contentType, userMetadata)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `bucket` doesn't exist.
    pub async fn create_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        content_type: String,
        user_metadata: HashMap<String, String>,
    ) -> S3ServiceResult<String> {
        validate_object_key(key)?;
        validate_metadata(&user_metadata)?;
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        Self::spawn(move || blocking_create_multipart_upload(&base, &bucket, &key, content_type, user_metadata)).await
    }

    /// `UploadPart(bucket, key, uploadId, partNumber, data)`. Part filenames
    /// embed the part number, so concurrent parts of the same upload need no
    /// cross-part lock (§5).
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchUpload`] if the upload doesn't exist,
    /// or [`S3ServiceError::InvalidArgument`] for an out-of-range part number.
    pub async fn upload_part(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: u32,
        data: Bytes,
    ) -> S3ServiceResult<UploadPartResult> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        let upload_id = upload_id.to_owned();
        Self::spawn(move || blocking_upload_part(&base, &bucket, &key, &upload_id, part_number, &data)).await
    }

    /// `UploadPartCopy(bucket, key, uploadId, partNumber, srcBucket, srcKey, range?)`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::get_object`] for the source, or
    /// [`Self::upload_part`] for the write.
    #[allow(clippy::too_many_arguments)]
    pub async fn upload_part_copy(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: u32,
        src_bucket: &str,
        src_key: &str,
        range: Option<ByteRange>,
    ) -> S3ServiceResult<UploadPartResult> {
        let source = self.get_object(src_bucket, src_key, range).await?;
        self.upload_part(bucket, key, upload_id, part_number, source.data).await
    }

    /// `CompleteMultipartUpload(bucket, key, uploadId, parts)`. Parts must be
    /// supplied in strictly ascending order; each part's recorded ETag must
    /// match what was uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchUpload`], [`S3ServiceError::InvalidPart`],
    /// or [`S3ServiceError::InvalidPartOrder`].
    pub async fn complete_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        parts: Vec<CompletedPartInput>,
    ) -> S3ServiceResult<CompleteMultipartUploadResult> {
        let _guard = self.object_lock(bucket, key).lock().await;
        let base = Arc::clone(&self.base);
        let refcounts = Arc::clone(&self.refcounts);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        let upload_id = upload_id.to_owned();
        Self::spawn(move || blocking_complete_multipart_upload(&base, &refcounts, &bucket, &key, &upload_id, &parts))
            .await
    }

    /// `AbortMultipartUpload(bucket, key, uploadId)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchUpload`] if the upload doesn't exist.
    pub async fn abort_multipart_upload(&self, bucket: &str, key: &str, upload_id: &str) -> S3ServiceResult<()> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        let upload_id = upload_id.to_owned();
        Self::spawn(move || blocking_abort_multipart_upload(&base, &bucket, &key, &upload_id)).await
    }

    /// `ListMultipartUploads(bucket, keyMarker, maxUploads)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the uploads directory can't be read.
    pub async fn list_multipart_uploads(
        &self,
        bucket: &str,
        key_marker: &str,
        max_uploads: u32,
    ) -> S3ServiceResult<ListMultipartUploadsPage> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key_marker = key_marker.to_owned();
        Self::spawn(move || blocking_list_multipart_uploads(&base, &bucket, &key_marker, max_uploads)).await
    }

    /// `ListParts(bucket, key, uploadId, partNumberMarker, maxParts)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchUpload`] if the upload doesn't exist.
    pub async fn list_parts(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number_marker: u32,
        max_parts: u32,
    ) -> S3ServiceResult<ListPartsPage> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        let upload_id = upload_id.to_owned();
        Self::spawn(move || blocking_list_parts(&base, &bucket, &key, &upload_id, part_number_marker, max_parts)).await
    }

    // -- Bucket logging ----------------------------------------------------

    /// `PutBucketLogging(bucket, config?)`. `None` removes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `bucket` doesn't exist.
    pub async fn put_bucket_logging(&self, bucket: &str, config: Option<BucketLoggingConfig>) -> S3ServiceResult<()> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        Self::spawn(move || blocking_put_bucket_logging(&base, &bucket, config)).await
    }

    /// `GetBucketLogging(bucket)`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if `bucket` doesn't exist.
    pub async fn get_bucket_logging(&self, bucket: &str) -> S3ServiceResult<Option<BucketLoggingConfig>> {
        let base = Arc::clone(&self.base);
        let bucket = bucket.to_owned();
        Self::spawn(move || blocking_get_bucket_logging(&base, &bucket)).await
    }
}

impl LogSink for S3StorageEngine {
    fn get_bucket_logging(&self, bucket: &str) -> BoxFuture<'_, Option<BucketLoggingTarget>> {
        let bucket = bucket.to_owned();
        Box::pin(async move {
            Self::get_bucket_logging(self, &bucket)
                .await
                .ok()
                .flatten()
                .map(|cfg| BucketLoggingTarget {
                    target_bucket: cfg.target_bucket,
                    target_prefix: cfg.target_prefix,
                })
        })
    }

    fn put_log_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> BoxFuture<'_, Result<(), String>> {
        let bucket = bucket.to_owned();
        let key = key.to_owned();
        Box::pin(async move {
            self.put_object(&bucket, &key, Bytes::from(data), "text/plain".to_owned(), HashMap::new(), None)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
    }
}

// ---------------------------------------------------------------------------
// Blocking helpers: buckets
// ---------------------------------------------------------------------------

fn blocking_create_bucket(base: &Path, name: &str) -> S3ServiceResult<()> {
    let dir = layout::bucket_dir(base, name);
    match std::fs::create_dir(&dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(S3ServiceError::BucketAlreadyExists { bucket: name.to_owned() })
        }
        Err(e) => Err(e.into()),
    }
}

fn blocking_delete_bucket(base: &Path, name: &str) -> S3ServiceResult<()> {
    let dir = layout::bucket_dir(base, name);
    if !dir.is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: name.to_owned() });
    }
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

fn blocking_bucket_exists(base: &Path, name: &str) -> bool {
    layout::bucket_dir(base, name).is_dir()
}

fn blocking_list_buckets(
    base: &Path,
    prefix: &str,
    max_buckets: u32,
    continuation_token: &str,
) -> S3ServiceResult<ListBucketsPage> {
    let mut buckets = Vec::new();
    for entry in std::fs::read_dir(base)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !name.starts_with(prefix) {
            continue;
        }
        if !continuation_token.is_empty() && name.as_str() <= continuation_token {
            continue;
        }
        let metadata = entry.metadata()?;
        let created_unix_ms = metadata
            .created()
            .or_else(|_| metadata.modified())
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        buckets.push(BucketRecord { name, created_unix_ms });
    }
    buckets.sort_by(|a, b| a.name.cmp(&b.name));

    let mut next_continuation_token = None;
    if buckets.len() > max_buckets as usize {
        buckets.truncate(max_buckets as usize);
        next_continuation_token = buckets.last().map(|b| b.name.clone());
    }
    Ok(ListBucketsPage { buckets, next_continuation_token })
}

// ---------------------------------------------------------------------------
// Blocking helpers: CAS blobs
// ---------------------------------------------------------------------------

fn write_cas_blob(base: &Path, digest_hex: &str, data: &[u8]) -> io::Result<()> {
    let path = layout::cas_blob_path(base, digest_hex);
    let parent = path.parent().expect("CAS blob path always has a parent");
    std::fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| e.error)?;
    Ok(())
}

fn remove_cas_blob(base: &Path, digest_hex: &str) -> io::Result<()> {
    let path = layout::cas_blob_path(base, digest_hex);
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Walk upward from `start_dir`, removing each directory as long as it's
/// empty, stopping at `bucket_root` (never removed) or the first non-empty
/// ancestor (§4.B algorithm 3).
fn remove_empty_ancestors(bucket_root: &Path, start_dir: &Path) {
    let mut dir = start_dir.to_path_buf();
    while dir != bucket_root && dir.starts_with(bucket_root) {
        if std::fs::remove_dir(&dir).is_err() {
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }
}

fn now_unix_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

// ---------------------------------------------------------------------------
// Blocking helpers: objects
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn blocking_put_object(
    base: &Path,
    refcounts: &RefcountStore,
    bucket: &str,
    key: &str,
    data: &[u8],
    content_type: String,
    user_metadata: HashMap<String, String>,
    expected_sha256: Option<String>,
) -> S3ServiceResult<PutObjectResult> {
    if !layout::bucket_dir(base, bucket).is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: bucket.to_owned() });
    }

    let digest = hex_digest(data);
    if let Some(expected) = &expected_sha256 {
        if !expected.eq_ignore_ascii_case(&digest) {
            return Err(S3ServiceError::BadDigest);
        }
    }

    let object_dir = layout::object_dir(base, bucket, key);
    let meta_path = object_dir.join(layout::META_FILE_NAME);
    let previous = ObjectMetaRecord::read_from(&meta_path).ok();

    if let Some(prev) = &previous {
        if prev.digest == digest {
            return Ok(PutObjectResult { etag: prev.etag.clone(), size: prev.size });
        }
    }

    let size = data.len() as u64;
    let etag = etag_from_hex(&digest);
    let inline_data = if data.len() <= layout::INLINE_THRESHOLD {
        Some(data.to_vec())
    } else {
        refcounts.insert_reference(&digest, || write_cas_blob(base, &digest, data))?;
        None
    };

    std::fs::create_dir_all(&object_dir)?;
    let record = ObjectMetaRecord {
        content_type,
        user_metadata,
        size,
        etag: etag.clone(),
        digest: digest.clone(),
        mtime_unix_ms: now_unix_ms(),
        inline_data,
    };
    record.write_to(&meta_path)?;

    if let Some(prev) = previous {
        if prev.digest != digest && prev.inline_data.is_none() {
            refcounts.release_reference(&prev.digest, || remove_cas_blob(base, &prev.digest))?;
        }
    }

    Ok(PutObjectResult { etag, size })
}

fn blocking_get_object(
    base: &Path,
    bucket: &str,
    key: &str,
    range: Option<ByteRange>,
) -> S3ServiceResult<ObjectData> {
    let meta_path = layout::object_meta_path(base, bucket, key);
    let record = ObjectMetaRecord::read_from(&meta_path)
        .map_err(|_| S3ServiceError::NoSuchKey { bucket: bucket.to_owned(), key: key.to_owned() })?;

    let full = match &record.inline_data {
        Some(bytes) => Bytes::from(bytes.clone()),
        None => Bytes::from(std::fs::read(layout::cas_blob_path(base, &record.digest))?),
    };

    let data = match range {
        Some(r) if r.start > r.end || r.end >= full.len() as u64 => return Err(S3ServiceError::InvalidRange),
        Some(r) => full.slice(r.start as usize..=r.end as usize),
        None => full,
    };

    Ok(ObjectData {
        total_size: record.size,
        content_type: record.content_type,
        etag: record.etag,
        mtime_unix_ms: record.mtime_unix_ms,
        user_metadata: record.user_metadata,
        range,
        data,
    })
}

fn blocking_delete_object(base: &Path, refcounts: &RefcountStore, bucket: &str, key: &str) -> S3ServiceResult<()> {
    let object_dir = layout::object_dir(base, bucket, key);
    let meta_path = object_dir.join(layout::META_FILE_NAME);
    let record = ObjectMetaRecord::read_from(&meta_path)
        .map_err(|_| S3ServiceError::NoSuchKey { bucket: bucket.to_owned(), key: key.to_owned() })?;

    std::fs::remove_file(&meta_path)?;
    if record.inline_data.is_none() {
        refcounts.release_reference(&record.digest, || remove_cas_blob(base, &record.digest))?;
    }
    remove_empty_ancestors(&layout::bucket_dir(base, bucket), &object_dir);
    Ok(())
}

/// Recursively collect object keys under `dir`, where a directory is a leaf
/// object iff it directly contains a `meta` file.
fn collect_object_keys(dir: &Path, key_prefix: &str, out: &mut Vec<String>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let key = if key_prefix.is_empty() { name } else { format!("{key_prefix}/{name}") };
        let meta_path = entry.path().join(layout::META_FILE_NAME);
        if meta_path.is_file() {
            out.push(key);
        } else {
            collect_object_keys(&entry.path(), &key, out)?;
        }
    }
    Ok(())
}

fn blocking_list_objects(
    base: &Path,
    bucket: &str,
    prefix: &str,
    delimiter: &str,
    marker: &str,
    max_keys: u32,
) -> S3ServiceResult<ListObjectsPage> {
    let bucket_dir = layout::bucket_dir(base, bucket);
    if !bucket_dir.is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: bucket.to_owned() });
    }

    let mut keys = Vec::new();
    collect_object_keys(&bucket_dir, "", &mut keys)?;
    keys.sort();

    let mut page = ListObjectsPage::default();
    let mut last_prefix: Option<String> = None;

    for key in keys {
        if !key.starts_with(prefix) || key.as_str() <= marker {
            continue;
        }

        let remainder = &key[prefix.len()..];
        if !delimiter.is_empty() {
            if let Some(idx) = remainder.find(delimiter) {
                let common_prefix = format!("{prefix}{}", &remainder[..idx + delimiter.len()]);
                if last_prefix.as_deref() == Some(common_prefix.as_str()) {
                    continue;
                }
                if page.objects.len() + page.common_prefixes.len() >= max_keys as usize {
                    page.is_truncated = true;
                    page.next_marker = Some(key);
                    break;
                }
                last_prefix = Some(common_prefix.clone());
                page.common_prefixes.push(common_prefix);
                continue;
            }
        }

        if page.objects.len() + page.common_prefixes.len() >= max_keys as usize {
            page.is_truncated = true;
            page.next_marker = Some(key);
            break;
        }

        let record = ObjectMetaRecord::read_from(&layout::object_meta_path(base, bucket, &key))?;
        page.objects.push(ObjectEntry {
            key,
            size: record.size,
            etag: record.etag,
            mtime_unix_ms: record.mtime_unix_ms,
        });
    }

    Ok(page)
}

#[allow(clippy::too_many_arguments)]
fn blocking_copy_object(
    base: &Path,
    refcounts: &RefcountStore,
    src_bucket: &str,
    src_key: &str,
    dst_bucket: &str,
    dst_key: &str,
    content_type: Option<String>,
    user_metadata: Option<HashMap<String, String>>,
) -> S3ServiceResult<CopyObjectResult> {
    if !layout::bucket_dir(base, dst_bucket).is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: dst_bucket.to_owned() });
    }

    let src = ObjectMetaRecord::read_from(&layout::object_meta_path(base, src_bucket, src_key))
        .map_err(|_| S3ServiceError::NoSuchKey { bucket: src_bucket.to_owned(), key: src_key.to_owned() })?;

    let dst_meta_path = layout::object_meta_path(base, dst_bucket, dst_key);
    let previous_dst = ObjectMetaRecord::read_from(&dst_meta_path).ok();

    if let Some(prev) = &previous_dst {
        if prev.digest == src.digest {
            return Ok(CopyObjectResult { etag: prev.etag.clone(), mtime_unix_ms: prev.mtime_unix_ms });
        }
    }

    if src.inline_data.is_none() {
        // The blob already exists (the source references it); this only
        // bumps the refcount, the write_blob closure never runs.
        refcounts.insert_reference(&src.digest, || {
            Err(io::Error::other("CAS blob missing for a referenced digest"))
        })?;
    }

    let mtime_unix_ms = now_unix_ms();
    let record = ObjectMetaRecord {
        content_type: content_type.unwrap_or_else(|| src.content_type.clone()),
        user_metadata: user_metadata.unwrap_or_else(|| src.user_metadata.clone()),
        size: src.size,
        etag: src.etag.clone(),
        digest: src.digest.clone(),
        mtime_unix_ms,
        inline_data: src.inline_data.clone(),
    };

    std::fs::create_dir_all(layout::object_dir(base, dst_bucket, dst_key))?;
    record.write_to(&dst_meta_path)?;

    if let Some(prev) = previous_dst {
        if prev.inline_data.is_none() {
            refcounts.release_reference(&prev.digest, || remove_cas_blob(base, &prev.digest))?;
        }
    }

    Ok(CopyObjectResult { etag: record.etag, mtime_unix_ms })
}

fn blocking_rename_object(
    base: &Path,
    refcounts: &RefcountStore,
    bucket: &str,
    src_key: &str,
    dst_key: &str,
) -> S3ServiceResult<()> {
    let src_object_dir = layout::object_dir(base, bucket, src_key);
    let src_meta_path = src_object_dir.join(layout::META_FILE_NAME);
    let src = ObjectMetaRecord::read_from(&src_meta_path)
        .map_err(|_| S3ServiceError::NoSuchKey { bucket: bucket.to_owned(), key: src_key.to_owned() })?;

    let dst_object_dir = layout::object_dir(base, bucket, dst_key);
    let dst_meta_path = dst_object_dir.join(layout::META_FILE_NAME);
    let previous_dst = ObjectMetaRecord::read_from(&dst_meta_path).ok();
    let bucket_root = layout::bucket_dir(base, bucket);

    if let Some(prev) = &previous_dst {
        if prev.digest == src.digest {
            std::fs::remove_file(&src_meta_path)?;
            if src.inline_data.is_none() {
                refcounts.release_reference(&src.digest, || remove_cas_blob(base, &src.digest))?;
            }
            remove_empty_ancestors(&bucket_root, &src_object_dir);
            return Ok(());
        }
    }

    std::fs::create_dir_all(&dst_object_dir)?;
    std::fs::rename(&src_meta_path, &dst_meta_path)?;
    remove_empty_ancestors(&bucket_root, &src_object_dir);

    if let Some(prev) = previous_dst {
        if prev.inline_data.is_none() {
            refcounts.release_reference(&prev.digest, || remove_cas_blob(base, &prev.digest))?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Blocking helpers: multipart uploads
// ---------------------------------------------------------------------------

fn write_part_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().expect("part path always has a parent");
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn find_part_file(dir: &Path, part_number: u32) -> Option<PathBuf> {
    let prefix = format!("{part_number}-");
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .find(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
        .map(|entry| entry.path())
}

fn remove_existing_part_file(dir: &Path, part_number: u32) -> io::Result<()> {
    if let Some(path) = find_part_file(dir, part_number) {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

fn blocking_create_multipart_upload(
    base: &Path,
    bucket: &str,
    key: &str,
    content_type: String,
    user_metadata: HashMap<String, String>,
) -> S3ServiceResult<String> {
    if !layout::bucket_dir(base, bucket).is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: bucket.to_owned() });
    }
    let upload_id = Uuid::new_v4().to_string();
    std::fs::create_dir_all(layout::upload_dir(base, bucket, key, &upload_id))?;
    let record = MultipartUploadMetaRecord {
        bucket: bucket.to_owned(),
        key: key.to_owned(),
        upload_id: upload_id.clone(),
        content_type,
        user_metadata,
        initiated_unix_ms: now_unix_ms(),
    };
    record.write_to(&layout::upload_meta_path(base, bucket, key, &upload_id))?;
    Ok(upload_id)
}

fn blocking_upload_part(
    base: &Path,
    bucket: &str,
    key: &str,
    upload_id: &str,
    part_number: u32,
    data: &[u8],
) -> S3ServiceResult<UploadPartResult> {
    if !(1..=10_000).contains(&part_number) {
        return Err(S3ServiceError::InvalidArgument {
            message: format!("Part number must be between 1 and 10000, got {part_number}"),
        });
    }
    let dir = layout::upload_dir(base, bucket, key, upload_id);
    if !dir.is_dir() {
        return Err(S3ServiceError::NoSuchUpload { upload_id: upload_id.to_owned() });
    }

    let digest = hex_digest(data);
    let etag = etag_from_hex(&digest);
    remove_existing_part_file(&dir, part_number)?;
    write_part_file(&layout::upload_part_path(&dir, part_number, &etag), data)?;

    Ok(UploadPartResult { etag, size: data.len() as u64 })
}

fn part_etag_from_filename(path: &Path, part_number: u32) -> Option<String> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    name.strip_prefix(&format!("{part_number}-")).map(str::to_owned)
}

fn blocking_complete_multipart_upload(
    base: &Path,
    refcounts: &RefcountStore,
    bucket: &str,
    key: &str,
    upload_id: &str,
    parts: &[CompletedPartInput],
) -> S3ServiceResult<CompleteMultipartUploadResult> {
    let dir = layout::upload_dir(base, bucket, key, upload_id);
    let meta_path = layout::upload_meta_path(base, bucket, key, upload_id);
    let upload_meta = MultipartUploadMetaRecord::read_from(&meta_path)
        .map_err(|_| S3ServiceError::NoSuchUpload { upload_id: upload_id.to_owned() })?;

    if parts.is_empty() {
        return Err(S3ServiceError::InvalidPart {
            message: "CompleteMultipartUpload requires at least one part".to_owned(),
        });
    }

    let mut previous_number = 0u32;
    let mut assembled = Vec::new();
    for part in parts {
        if part.part_number <= previous_number {
            return Err(S3ServiceError::InvalidPartOrder);
        }
        previous_number = part.part_number;

        let path = find_part_file(&dir, part.part_number)
            .ok_or_else(|| S3ServiceError::InvalidPart { message: format!("part {} was not uploaded", part.part_number) })?;
        let on_disk_etag = part_etag_from_filename(&path, part.part_number).ok_or_else(|| S3ServiceError::InvalidPart {
            message: format!("part {} has a malformed name", part.part_number),
        })?;
        if on_disk_etag != part.etag {
            return Err(S3ServiceError::InvalidPart {
                message: format!("part {} ETag does not match the uploaded data", part.part_number),
            });
        }
        assembled.extend_from_slice(&std::fs::read(&path)?);
    }

    let digest = hex_digest(&assembled);
    let etag = etag_from_hex(&digest);
    let size = assembled.len() as u64;

    let object_meta_path = layout::object_meta_path(base, bucket, key);
    let previous = ObjectMetaRecord::read_from(&object_meta_path).ok();

    let inline_data = if assembled.len() <= layout::INLINE_THRESHOLD {
        Some(assembled.clone())
    } else {
        refcounts.insert_reference(&digest, || write_cas_blob(base, &digest, &assembled))?;
        None
    };

    std::fs::create_dir_all(layout::object_dir(base, bucket, key))?;
    let record = ObjectMetaRecord {
        content_type: upload_meta.content_type,
        user_metadata: upload_meta.user_metadata,
        size,
        etag: etag.clone(),
        digest: digest.clone(),
        mtime_unix_ms: now_unix_ms(),
        inline_data,
    };
    record.write_to(&object_meta_path)?;

    if let Some(prev) = previous {
        if prev.digest != digest && prev.inline_data.is_none() {
            refcounts.release_reference(&prev.digest, || remove_cas_blob(base, &prev.digest))?;
        }
    }

    std::fs::remove_dir_all(&dir).ok();
    Ok(CompleteMultipartUploadResult { etag, size })
}

fn blocking_abort_multipart_upload(base: &Path, bucket: &str, key: &str, upload_id: &str) -> S3ServiceResult<()> {
    let dir = layout::upload_dir(base, bucket, key, upload_id);
    if !dir.is_dir() {
        return Err(S3ServiceError::NoSuchUpload { upload_id: upload_id.to_owned() });
    }
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

fn collect_uploads(dir: &Path, key_prefix: &str, out: &mut Vec<MultipartUploadSummary>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let key = if key_prefix.is_empty() { name } else { format!("{key_prefix}/{name}") };
        let meta_path = entry.path().join(layout::META_FILE_NAME);
        if meta_path.is_file() {
            let record = MultipartUploadMetaRecord::read_from(&meta_path)?;
            out.push(MultipartUploadSummary {
                key: record.key,
                upload_id: record.upload_id,
                initiated_unix_ms: record.initiated_unix_ms,
            });
        } else {
            collect_uploads(&entry.path(), &key, out)?;
        }
    }
    Ok(())
}

fn blocking_list_multipart_uploads(
    base: &Path,
    bucket: &str,
    key_marker: &str,
    max_uploads: u32,
) -> S3ServiceResult<ListMultipartUploadsPage> {
    let root = layout::uploads_root(base).join(bucket);
    let mut uploads = Vec::new();
    if root.is_dir() {
        collect_uploads(&root, "", &mut uploads)?;
    }
    uploads.sort_by(|a, b| (a.key.as_str(), a.upload_id.as_str()).cmp(&(b.key.as_str(), b.upload_id.as_str())));

    let mut page = ListMultipartUploadsPage::default();
    for upload in uploads {
        if upload.key.as_str() <= key_marker {
            continue;
        }
        if page.uploads.len() >= max_uploads as usize {
            page.is_truncated = true;
            break;
        }
        page.uploads.push(upload);
    }
    Ok(page)
}

fn blocking_list_parts(
    base: &Path,
    bucket: &str,
    key: &str,
    upload_id: &str,
    part_number_marker: u32,
    max_parts: u32,
) -> S3ServiceResult<ListPartsPage> {
    let dir = layout::upload_dir(base, bucket, key, upload_id);
    if !dir.is_dir() {
        return Err(S3ServiceError::NoSuchUpload { upload_id: upload_id.to_owned() });
    }

    let mut parts = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == layout::META_FILE_NAME {
            continue;
        }
        if let Some((number_str, etag)) = name.split_once('-') {
            if let Ok(part_number) = number_str.parse::<u32>() {
                let metadata = entry.metadata()?;
                let mtime_unix_ms = metadata
                    .modified()
                    .ok()
                    .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0);
                parts.push(PartSummary { part_number, etag: etag.to_owned(), size: metadata.len(), mtime_unix_ms });
            }
        }
    }
    parts.sort_by_key(|p| p.part_number);

    let mut page = ListPartsPage::default();
    for part in parts {
        if part.part_number <= part_number_marker {
            continue;
        }
        if page.parts.len() >= max_parts as usize {
            page.is_truncated = true;
            page.next_part_number_marker = Some(part.part_number);
            break;
        }
        page.parts.push(part);
    }
    Ok(page)
}

// ---------------------------------------------------------------------------
// Blocking helpers: bucket logging
// ---------------------------------------------------------------------------

fn blocking_put_bucket_logging(base: &Path, bucket: &str, config: Option<BucketLoggingConfig>) -> S3ServiceResult<()> {
    if !layout::bucket_dir(base, bucket).is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: bucket.to_owned() });
    }
    let path = layout::bucket_logging_path(base, bucket);
    match config {
        Some(cfg) => {
            let data = serde_json::to_vec(&cfg).map_err(|e| S3ServiceError::Internal(anyhow::anyhow!(e)))?;
            let tmp = path.with_extension("tmp");
            std::fs::write(&tmp, data)?;
            std::fs::rename(&tmp, &path)?;
        }
        None => {
            if let Err(e) = std::fs::remove_file(&path) {
                if e.kind() != io::ErrorKind::NotFound {
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}

fn blocking_get_bucket_logging(base: &Path, bucket: &str) -> S3ServiceResult<Option<BucketLoggingConfig>> {
    if !layout::bucket_dir(base, bucket).is_dir() {
        return Err(S3ServiceError::NoSuchBucket { bucket: bucket.to_owned() });
    }
    match std::fs::read(layout::bucket_logging_path(base, bucket)) {
        Ok(data) => {
            serde_json::from_slice(&data).map(Some).map_err(|e| S3ServiceError::Internal(anyhow::anyhow!(e)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    async fn engine() -> (tempfile::TempDir, S3StorageEngine) {
        let dir = tempfile::tempdir().expect("test tempdir");
        let engine = S3StorageEngine::open(dir.path().join("data")).expect("test open");
        (dir, engine)
    }

    #[tokio::test]
    async fn test_should_create_and_delete_bucket() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("bucket").await.expect("test create");
        assert!(engine.bucket_exists("bucket").await);
        engine.delete_bucket("bucket").await.expect("test delete");
        assert!(!engine.bucket_exists("bucket").await);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_bucket() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("bucket").await.expect("test create");
        let err = engine.create_bucket("bucket").await.unwrap_err();
        assert!(matches!(err, S3ServiceError::BucketAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_bucket_name() {
        let (_dir, engine) = engine().await;
        let err = engine.create_bucket("..").await.unwrap_err();
        assert!(matches!(err, S3ServiceError::InvalidBucketName { .. }));
    }

    #[tokio::test]
    async fn test_should_round_trip_small_inline_object() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let put = engine
            .put_object("b", "hello.txt", Bytes::from_static(b"hi"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .expect("test put");
        let got = engine.get_object("b", "hello.txt", None).await.expect("test get");
        assert_eq!(got.data, Bytes::from_static(b"hi"));
        assert_eq!(got.etag, put.etag);
        assert_eq!(got.total_size, 2);
    }

    #[tokio::test]
    async fn test_should_round_trip_large_cas_backed_object() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let payload = vec![7u8; layout::INLINE_THRESHOLD + 1];
        engine
            .put_object("b", "big.bin", Bytes::from(payload.clone()), "application/octet-stream".to_owned(), HashMap::new(), None)
            .await
            .expect("test put");
        let got = engine.get_object("b", "big.bin", None).await.expect("test get");
        assert_eq!(got.data.as_ref(), payload.as_slice());
    }

    #[tokio::test]
    async fn test_should_reject_bad_digest() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let err = engine
            .put_object("b", "k", Bytes::from_static(b"hi"), "text/plain".to_owned(), HashMap::new(), Some("0".repeat(64)))
            .await
            .unwrap_err();
        assert!(matches!(err, S3ServiceError::BadDigest));
    }

    #[tokio::test]
    async fn test_should_fail_put_object_for_missing_bucket() {
        let (_dir, engine) = engine().await;
        let err = engine
            .put_object("missing", "k", Bytes::from_static(b"hi"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, S3ServiceError::NoSuchBucket { .. }));
    }

    #[tokio::test]
    async fn test_should_honor_byte_range() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        engine
            .put_object("b", "k", Bytes::from_static(b"0123456789"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        let got = engine.get_object("b", "k", Some(ByteRange { start: 2, end: 4 })).await.expect("test range");
        assert_eq!(got.data, Bytes::from_static(b"234"));
        assert_eq!(got.total_size, 10);
    }

    #[tokio::test]
    async fn test_should_reject_unsatisfiable_range() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        engine
            .put_object("b", "k", Bytes::from_static(b"hi"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        let err = engine.get_object("b", "k", Some(ByteRange { start: 0, end: 100 })).await.unwrap_err();
        assert!(matches!(err, S3ServiceError::InvalidRange));
    }

    #[tokio::test]
    async fn test_should_fail_get_object_for_missing_key() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let err = engine.get_object("b", "missing", None).await.unwrap_err();
        assert!(matches!(err, S3ServiceError::NoSuchKey { .. }));
    }

    #[tokio::test]
    async fn test_should_delete_object_and_release_cas_blob() {
        let (dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let payload = vec![9u8; layout::INLINE_THRESHOLD + 1];
        engine
            .put_object("b", "big.bin", Bytes::from(payload.clone()), "application/octet-stream".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        let digest = hex_digest(&payload);
        let blob_path = layout::cas_blob_path(&dir.path().join("data"), &digest);
        assert!(blob_path.exists());

        engine.delete_object("b", "big.bin").await.expect("test delete");
        assert!(!blob_path.exists());
        let err = engine.get_object("b", "big.bin", None).await.unwrap_err();
        assert!(matches!(err, S3ServiceError::NoSuchKey { .. }));
    }

    #[tokio::test]
    async fn test_should_reuse_cas_blob_for_identical_content() {
        let (dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let payload = vec![3u8; layout::INLINE_THRESHOLD + 1];
        engine
            .put_object("b", "one", Bytes::from(payload.clone()), "application/octet-stream".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        engine
            .put_object("b", "two", Bytes::from(payload.clone()), "application/octet-stream".to_owned(), HashMap::new(), None)
            .await
            .unwrap();

        let digest = hex_digest(&payload);
        let blob_path = layout::cas_blob_path(&dir.path().join("data"), &digest);
        assert!(blob_path.exists());

        engine.delete_object("b", "one").await.unwrap();
        assert!(blob_path.exists(), "blob must survive while a second reference remains");
        engine.delete_object("b", "two").await.unwrap();
        assert!(!blob_path.exists(), "blob must be removed once the last reference is gone");
    }

    #[tokio::test]
    async fn test_should_cleanup_empty_parent_directories_on_delete() {
        let (dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        engine
            .put_object("b", "a/b/c.txt", Bytes::from_static(b"hi"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        engine.delete_object("b", "a/b/c.txt").await.unwrap();
        assert!(!dir.path().join("data/b/a").exists());
        assert!(dir.path().join("data/b").exists());
    }

    #[tokio::test]
    async fn test_put_object_is_noop_for_identical_digest() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let first = engine
            .put_object("b", "k", Bytes::from_static(b"same"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        let second = engine
            .put_object("b", "k", Bytes::from_static(b"same"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        assert_eq!(first.etag, second.etag);
    }

    #[tokio::test]
    async fn test_should_list_objects_with_prefix_and_delimiter() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        for key in ["photos/2024/a.jpg", "photos/2024/b.jpg", "photos/2025/c.jpg", "readme.txt"] {
            engine.put_object("b", key, Bytes::from_static(b"x"), "text/plain".to_owned(), HashMap::new(), None).await.unwrap();
        }

        let page = engine.list_objects("b", "photos/", "/", "", 100).await.expect("test list");
        assert_eq!(page.common_prefixes, vec!["photos/2024/".to_owned(), "photos/2025/".to_owned()]);
        assert!(page.objects.is_empty());
        assert!(!page.is_truncated);
    }

    #[tokio::test]
    async fn test_should_paginate_list_objects() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        for key in ["a", "b", "c"] {
            engine.put_object("b", key, Bytes::from_static(b"x"), "text/plain".to_owned(), HashMap::new(), None).await.unwrap();
        }

        let page = engine.list_objects("b", "", "", "", 2).await.expect("test list");
        assert_eq!(page.objects.len(), 2);
        assert!(page.is_truncated);
        assert_eq!(page.next_marker.as_deref(), Some("b"));

        let page2 = engine.list_objects("b", "", "", &page.next_marker.unwrap(), 2).await.expect("test list");
        assert_eq!(page2.objects.len(), 1);
        assert!(!page2.is_truncated);
    }

    #[tokio::test]
    async fn test_should_copy_object_without_rehash() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let put = engine
            .put_object("b", "src", Bytes::from_static(b"copy me"), "text/plain".to_owned(), HashMap::new(), None)
            .await
            .unwrap();
        let copy = engine.copy_object("b", "src", "b", "dst", None, None).await.expect("test copy");
        assert_eq!(copy.etag, put.etag);
        let got = engine.get_object("b", "dst", None).await.unwrap();
        assert_eq!(got.data, Bytes::from_static(b"copy me"));
    }

    #[tokio::test]
    async fn test_should_rename_object() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        engine.put_object("b", "old", Bytes::from_static(b"move me"), "text/plain".to_owned(), HashMap::new(), None).await.unwrap();
        engine.rename_object("b", "old", "new").await.expect("test rename");
        assert!(engine.get_object("b", "old", None).await.is_err());
        let got = engine.get_object("b", "new", None).await.expect("test get renamed");
        assert_eq!(got.data, Bytes::from_static(b"move me"));
    }

    #[tokio::test]
    async fn test_multipart_upload_happy_path() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let upload_id = engine
            .create_multipart_upload("b", "big", "application/octet-stream".to_owned(), HashMap::new())
            .await
            .expect("test initiate");

        let part1 = engine.upload_part("b", "big", &upload_id, 1, Bytes::from_static(b"hello ")).await.expect("test part 1");
        let part2 = engine.upload_part("b", "big", &upload_id, 2, Bytes::from_static(b"world")).await.expect("test part 2");

        let result = engine
            .complete_multipart_upload(
                "b",
                "big",
                &upload_id,
                vec![
                    CompletedPartInput { part_number: 1, etag: part1.etag },
                    CompletedPartInput { part_number: 2, etag: part2.etag },
                ],
            )
            .await
            .expect("test complete");
        assert_eq!(result.size, 11);

        let got = engine.get_object("b", "big", None).await.expect("test get assembled");
        assert_eq!(got.data, Bytes::from_static(b"hello world"));
    }

    #[tokio::test]
    async fn test_multipart_upload_rejects_out_of_order_parts() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let upload_id = engine.create_multipart_upload("b", "big", "text/plain".to_owned(), HashMap::new()).await.unwrap();
        let part1 = engine.upload_part("b", "big", &upload_id, 1, Bytes::from_static(b"a")).await.unwrap();
        let part2 = engine.upload_part("b", "big", &upload_id, 2, Bytes::from_static(b"b")).await.unwrap();

        let err = engine
            .complete_multipart_upload(
                "b",
                "big",
                &upload_id,
                vec![
                    CompletedPartInput { part_number: 2, etag: part2.etag },
                    CompletedPartInput { part_number: 1, etag: part1.etag },
                ],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, S3ServiceError::InvalidPartOrder));
    }

    #[tokio::test]
    async fn test_abort_multipart_upload_discards_parts() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        let upload_id = engine.create_multipart_upload("b", "big", "text/plain".to_owned(), HashMap::new()).await.unwrap();
        engine.upload_part("b", "big", &upload_id, 1, Bytes::from_static(b"a")).await.unwrap();

        engine.abort_multipart_upload("b", "big", &upload_id).await.expect("test abort");
        let err = engine.list_parts("b", "big", &upload_id, 0, 100).await.unwrap_err();
        assert!(matches!(err, S3ServiceError::NoSuchUpload { .. }));
    }

    #[tokio::test]
    async fn test_should_list_multipart_uploads() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        engine.create_multipart_upload("b", "a", "text/plain".to_owned(), HashMap::new()).await.unwrap();
        engine.create_multipart_upload("b", "z", "text/plain".to_owned(), HashMap::new()).await.unwrap();

        let page = engine.list_multipart_uploads("b", "", 100).await.expect("test list uploads");
        assert_eq!(page.uploads.len(), 2);
        assert_eq!(page.uploads[0].key, "a");
        assert_eq!(page.uploads[1].key, "z");
    }

    #[tokio::test]
    async fn test_should_round_trip_bucket_logging_config() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("b").await.unwrap();
        assert!(engine.get_bucket_logging("b").await.unwrap().is_none());

        let config = BucketLoggingConfig { target_bucket: "logs".to_owned(), target_prefix: "b/".to_owned() };
        engine.put_bucket_logging("b", Some(config.clone())).await.expect("test put logging");
        let got = engine.get_bucket_logging("b").await.expect("test get logging").expect("config present");
        assert_eq!(got, config);

        engine.put_bucket_logging("b", None).await.expect("test remove logging");
        assert!(engine.get_bucket_logging("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_log_sink_put_log_object_lands_in_target_bucket() {
        let (_dir, engine) = engine().await;
        engine.create_bucket("logs").await.unwrap();
        LogSink::put_log_object(&engine, "logs", "2026-01-01-00-source.log", b"entry\n".to_vec())
            .await
            .expect("test put log object");
        let got = engine.get_object("logs", "2026-01-01-00-source.log", None).await.expect("test get log object");
        assert_eq!(got.data, Bytes::from_static(b"entry\n"));
    }
}

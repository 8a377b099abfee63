//! Access-log entry formatting.

use chrono::{DateTime, Utc};

/// The fields of a single access-log entry.
///
/// Every field but the timestamp is optional in spirit — missing values are
/// rendered as `-` per the S3 access-log convention. `None` is used here
/// instead of empty strings so callers cannot accidentally confuse "empty
/// string" with "field absent".
#[derive(Debug, Clone)]
pub struct LogFields {
    /// The bucket's owner. RustStack has no account model, so this is
    /// always the single synthetic owner id.
    pub bucket_owner: String,
    /// The bucket the request targeted.
    pub bucket: String,
    /// When the request was received.
    pub timestamp: DateTime<Utc>,
    /// The requester's source address.
    pub remote_ip: Option<String>,
    /// The authenticated access key id, if any.
    pub requester: Option<String>,
    /// A per-request identifier (e.g. a UUID minted by the dispatcher).
    pub request_id: String,
    /// The derived operation token, e.g. `REST.GET.OBJECT`.
    pub operation: String,
    /// The object key the request targeted, if any.
    pub key: Option<String>,
    /// The raw request URI (path + query string).
    pub request_uri: String,
    /// The HTTP status code returned.
    pub http_status: u16,
    /// The S3 error code returned, if the request failed.
    pub error_code: Option<String>,
    /// Bytes sent in the response body.
    pub bytes_sent: Option<u64>,
    /// The size of the underlying object, if known.
    pub object_size: Option<u64>,
    /// Total time to serve the request, in milliseconds.
    pub total_time_ms: Option<u64>,
}

/// A formatted, ready-to-flush access-log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    line: String,
}

impl LogEntry {
    /// Format `fields` into a single newline-terminated log line.
    #[must_use]
    pub fn new(fields: &LogFields) -> Self {
        fn dash(value: Option<&str>) -> String {
            value.unwrap_or("-").to_owned()
        }
        fn dash_num(value: Option<u64>) -> String {
            value.map_or_else(|| "-".to_owned(), |v| v.to_string())
        }

        let line = format!(
            "{bucket_owner} {bucket} [{timestamp}] {remote_ip} {requester} {request_id} {operation} {key} [{request_uri}] {status} {error_code} {bytes_sent} {object_size} {total_time}\n",
            bucket_owner = fields.bucket_owner,
            bucket = fields.bucket,
            timestamp = fields.timestamp.format("%d/%b/%Y:%H:%M:%S %z"),
            remote_ip = dash(fields.remote_ip.as_deref()),
            requester = dash(fields.requester.as_deref()),
            request_id = fields.request_id,
            operation = fields.operation,
            key = dash(fields.key.as_deref()),
            request_uri = fields.request_uri,
            status = fields.http_status,
            error_code = dash(fields.error_code.as_deref()),
            bytes_sent = dash_num(fields.bytes_sent),
            object_size = dash_num(fields.object_size),
            total_time = dash_num(fields.total_time_ms),
        );
        Self { line }
    }

    /// The formatted line, including its trailing newline.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Length in bytes of the formatted line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether the formatted line is empty (never true in practice).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// Derive the `REST.<METHOD>.<SUBJECT>` operation token used in log lines.
///
/// `sub_resource` is the identified query sub-resource, if any (`logging`,
/// `uploads`, `uploadId`, `delete`, `partNumber`).
#[must_use]
pub fn derive_operation(method: &str, has_key: bool, sub_resource: Option<&str>) -> String {
    let method = method.to_ascii_uppercase();
    let subject = match (has_key, sub_resource) {
        (_, Some("logging")) => "LOGGING".to_owned(),
        (true, Some("uploadId")) if method == "PUT" => "PART".to_owned(),
        (true, Some("uploadId")) if method == "POST" => "COMPLETE_MULTIPART_UPLOAD".to_owned(),
        (true, Some("uploadId")) if method == "DELETE" => "ABORT_MULTIPART_UPLOAD".to_owned(),
        (true, Some("uploadId")) => "LIST_PARTS".to_owned(),
        (true, Some("uploads")) => "INITIATE_MULTIPART_UPLOAD".to_owned(),
        (false, Some("uploads")) => "LIST_MULTIPART_UPLOADS".to_owned(),
        (false, Some("delete")) => "MULTI_OBJECT_DELETE".to_owned(),
        (true, _) => "OBJECT".to_owned(),
        (false, _) => "BUCKET".to_owned(),
    };
    format!("REST.{method}.{subject}")
}

//! The S3 operations this service implements.

/// All S3 operations supported by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Operation {
    /// The CreateBucket operation.
    CreateBucket,
    /// The DeleteBucket operation.
    DeleteBucket,
    /// The HeadBucket operation.
    HeadBucket,
    /// The ListBuckets operation.
    ListBuckets,
    /// The GetBucketLogging operation.
    GetBucketLogging,
    /// The PutBucketLogging operation.
    PutBucketLogging,
    /// The PutObject operation.
    PutObject,
    /// The GetObject operation.
    GetObject,
    /// The HeadObject operation.
    HeadObject,
    /// The DeleteObject operation.
    DeleteObject,
    /// The DeleteObjects operation (multi-object delete).
    DeleteObjects,
    /// The CopyObject operation.
    CopyObject,
    /// The RenameObject operation (`x-amz-rename-source`).
    RenameObject,
    /// The CreateMultipartUpload operation.
    CreateMultipartUpload,
    /// The UploadPart operation.
    UploadPart,
    /// The UploadPartCopy operation.
    UploadPartCopy,
    /// The CompleteMultipartUpload operation.
    CompleteMultipartUpload,
    /// The AbortMultipartUpload operation.
    AbortMultipartUpload,
    /// The ListParts operation.
    ListParts,
    /// The ListMultipartUploads operation.
    ListMultipartUploads,
    /// The ListObjects (v1) operation.
    ListObjects,
    /// The ListObjectsV2 operation.
    ListObjectsV2,
}

impl S3Operation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateBucket => "CreateBucket",
            Self::DeleteBucket => "DeleteBucket",
            Self::HeadBucket => "HeadBucket",
            Self::ListBuckets => "ListBuckets",
            Self::GetBucketLogging => "GetBucketLogging",
            Self::PutBucketLogging => "PutBucketLogging",
            Self::PutObject => "PutObject",
            Self::GetObject => "GetObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObject => "DeleteObject",
            Self::DeleteObjects => "DeleteObjects",
            Self::CopyObject => "CopyObject",
            Self::RenameObject => "RenameObject",
            Self::CreateMultipartUpload => "CreateMultipartUpload",
            Self::UploadPart => "UploadPart",
            Self::UploadPartCopy => "UploadPartCopy",
            Self::CompleteMultipartUpload => "CompleteMultipartUpload",
            Self::AbortMultipartUpload => "AbortMultipartUpload",
            Self::ListParts => "ListParts",
            Self::ListMultipartUploads => "ListMultipartUploads",
            Self::ListObjects => "ListObjects",
            Self::ListObjectsV2 => "ListObjectsV2",
        }
    }

    /// Parse an operation name string into an `S3Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateBucket" => Some(Self::CreateBucket),
            "DeleteBucket" => Some(Self::DeleteBucket),
            "HeadBucket" => Some(Self::HeadBucket),
            "ListBuckets" => Some(Self::ListBuckets),
            "GetBucketLogging" => Some(Self::GetBucketLogging),
            "PutBucketLogging" => Some(Self::PutBucketLogging),
            "PutObject" => Some(Self::PutObject),
            "GetObject" => Some(Self::GetObject),
            "HeadObject" => Some(Self::HeadObject),
            "DeleteObject" => Some(Self::DeleteObject),
            "DeleteObjects" => Some(Self::DeleteObjects),
            "CopyObject" => Some(Self::CopyObject),
            "RenameObject" => Some(Self::RenameObject),
            "CreateMultipartUpload" => Some(Self::CreateMultipartUpload),
            "UploadPart" => Some(Self::UploadPart),
            "UploadPartCopy" => Some(Self::UploadPartCopy),
            "CompleteMultipartUpload" => Some(Self::CompleteMultipartUpload),
            "AbortMultipartUpload" => Some(Self::AbortMultipartUpload),
            "ListParts" => Some(Self::ListParts),
            "ListMultipartUploads" => Some(Self::ListMultipartUploads),
            "ListObjects" => Some(Self::ListObjects),
            "ListObjectsV2" => Some(Self::ListObjectsV2),
            _ => None,
        }
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_every_operation_name() {
        let ops = [
            S3Operation::CreateBucket,
            S3Operation::DeleteBucket,
            S3Operation::HeadBucket,
            S3Operation::ListBuckets,
            S3Operation::GetBucketLogging,
            S3Operation::PutBucketLogging,
            S3Operation::PutObject,
            S3Operation::GetObject,
            S3Operation::HeadObject,
            S3Operation::DeleteObject,
            S3Operation::DeleteObjects,
            S3Operation::CopyObject,
            S3Operation::RenameObject,
            S3Operation::CreateMultipartUpload,
            S3Operation::UploadPart,
            S3Operation::UploadPartCopy,
            S3Operation::CompleteMultipartUpload,
            S3Operation::AbortMultipartUpload,
            S3Operation::ListParts,
            S3Operation::ListMultipartUploads,
            S3Operation::ListObjects,
            S3Operation::ListObjectsV2,
        ];
        for op in ops {
            assert_eq!(S3Operation::from_name(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation_name() {
        assert_eq!(S3Operation::from_name("PutBucketVersioning"), None);
    }
}

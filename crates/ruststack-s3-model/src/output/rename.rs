//! `RenameObjectOutput`.
//!
//! Hand written alongside [`crate::input::rename::RenameObjectInput`]; see
//! that module for why `RenameObject` has no Smithy shape to generate from.

/// S3 RenameObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct RenameObjectOutput {
    /// ETag of the renamed object at its destination key.
    pub e_tag: Option<String>,
    /// Last-modified time of the renamed object at its destination key.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

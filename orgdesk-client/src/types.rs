//! Client-side payload types

use serde::{Deserialize, Serialize};

/// In-memory file payload for imports and QR uploads
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Original file name, e.g. "officers.xlsx"
    pub file_name: String,
    /// MIME type, e.g. "image/png"
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Human-readable summary of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    /// e.g. "12 officers imported, 2 rows skipped"
    pub detail: String,
}

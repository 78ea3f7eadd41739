//! File entity model.

use serde::{Deserialize, Serialize};

/// Metadata of a file belonging to a share.
///
/// `name` is a slash-delimited path relative to the share root (no leading
/// slash). Files extracted from an archive carry the archive name as their
/// first segment, e.g. `holiday.zip/day1/beach.png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file identifier within the share.
    pub id: String,
    /// Relative path of the file, including its own name.
    pub name: String,
    /// File size in bytes, as a decimal string.
    pub size: String,
    /// Whether the file was uploaded as part of a gallery.
    #[serde(default, alias = "isGallery", skip_serializing_if = "Option::is_none")]
    pub is_gallery: Option<bool>,
}

impl FileRecord {
    /// Create a file record with no gallery flag.
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: size.into(),
            is_gallery: None,
        }
    }

    /// Check if the file sits at the share root (no folder component).
    pub fn is_root_level(&self) -> bool {
        !self.name.contains('/')
    }

    /// Parse the size string into a byte count.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.trim().parse().ok()
    }
}

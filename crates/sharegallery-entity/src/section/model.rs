//! Gallery section models.

use serde::{Deserialize, Serialize};

use crate::file::FileRecord;

/// A display group of files sharing one (possibly compressed) folder path.
///
/// `path` is empty for files at the root of the grouped set; otherwise it
/// is a slash-joined chain of folder names, where runs of folders holding
/// no files and a single sub-folder are merged into one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section<T = FileRecord> {
    /// Heading of the section.
    pub path: String,
    /// Files of the section, in input order.
    pub files: Vec<T>,
}

impl<T> Section<T> {
    /// Check if this is the root section (no heading).
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// The image sections extracted from one archive of a share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveGallery {
    /// The archive file itself, as listed at the share root.
    pub archive: FileRecord,
    /// Image sections, keyed by paths relative to the archive.
    pub sections: Vec<Section>,
}

impl ArchiveGallery {
    /// Total number of images across all sections.
    pub fn image_count(&self) -> usize {
        self.sections.iter().map(|s| s.files.len()).sum()
    }
}

//! # sharegallery-service
//!
//! Business logic for Share Gallery: folder-section building, archive
//! gallery grouping, share listing summaries, and the share access seam
//! the HTTP layer fetches shares through.

pub mod gallery;
pub mod share;

pub use gallery::GalleryService;
pub use share::{ManifestShareStore, ShareAccess};

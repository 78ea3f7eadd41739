//! Gallery building.

pub mod archive;
pub mod listing;
pub mod sections;
pub mod service;

pub use archive::build_archive_galleries;
pub use listing::{ListingSummary, summarize};
pub use sections::{build_sections, build_sections_by};
pub use service::{GalleryPage, GalleryService, ShareOverview};

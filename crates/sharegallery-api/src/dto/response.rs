//! Response DTOs.

use serde::{Deserialize, Serialize};

use sharegallery_core::config::GalleryConfig;
use sharegallery_entity::file::FileRecord;
use sharegallery_entity::section::{ArchiveGallery, Section};
use sharegallery_entity::share::Share;
use sharegallery_service::gallery::{GalleryPage, ListingSummary, ShareOverview};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Exposed file metadata. The owning share is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDto {
    /// File ID.
    pub id: String,
    /// Relative path name.
    pub name: String,
    /// Size in bytes, as a decimal string.
    pub size: String,
    /// Gallery upload flag.
    pub is_gallery: bool,
    /// Retrieval endpoint of the file.
    pub url: String,
}

impl FileDto {
    /// Builds the DTO of a file belonging to `share_id`.
    pub fn from_record(file: &FileRecord, share_id: &str, config: &GalleryConfig) -> Self {
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            size: file.size.clone(),
            is_gallery: file.is_gallery.unwrap_or(false),
            url: config.file_url(share_id, &file.id),
        }
    }
}

/// A titled group of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    /// Heading; empty for the root section.
    pub path: String,
    /// Files.
    pub files: Vec<FileDto>,
}

impl SectionDto {
    fn from_section(section: &Section, share_id: &str, config: &GalleryConfig) -> Self {
        Self {
            path: section.path.clone(),
            files: section
                .files
                .iter()
                .map(|f| FileDto::from_record(f, share_id, config))
                .collect(),
        }
    }
}

fn sections_dto(sections: &[Section], share_id: &str, config: &GalleryConfig) -> Vec<SectionDto> {
    sections
        .iter()
        .map(|s| SectionDto::from_section(s, share_id, config))
        .collect()
}

/// Share header shown on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareHeader {
    /// Share ID.
    pub id: String,
    /// Display title (name, or id when unnamed).
    pub title: String,
    /// Description.
    pub description: Option<String>,
}

impl From<&Share> for ShareHeader {
    fn from(share: &Share) -> Self {
        Self {
            id: share.id.clone(),
            title: share.title().to_string(),
            description: share.description.clone(),
        }
    }
}

/// Image gallery of one archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveGalleryDto {
    /// The archive file.
    pub archive: FileDto,
    /// Image sections inside the archive.
    pub sections: Vec<SectionDto>,
}

impl ArchiveGalleryDto {
    fn from_gallery(gallery: &ArchiveGallery, share_id: &str, config: &GalleryConfig) -> Self {
        Self {
            archive: FileDto::from_record(&gallery.archive, share_id, config),
            sections: sections_dto(&gallery.sections, share_id, config),
        }
    }
}

/// GET /api/shares/{share_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareOverviewResponse {
    /// Share header.
    pub share: ShareHeader,
    /// Root-level files.
    pub files: Vec<FileDto>,
    /// Count and size of `files`.
    pub summary: ListingSummary,
    /// Archive galleries.
    pub archives: Vec<ArchiveGalleryDto>,
}

impl ShareOverviewResponse {
    /// Renders an overview page.
    pub fn from_overview(overview: &ShareOverview, config: &GalleryConfig) -> Self {
        let share_id = overview.share.id.as_str();
        Self {
            share: ShareHeader::from(&overview.share),
            files: overview
                .root_files
                .iter()
                .map(|f| FileDto::from_record(f, share_id, config))
                .collect(),
            summary: overview.summary.clone(),
            archives: overview
                .archives
                .iter()
                .map(|g| ArchiveGalleryDto::from_gallery(g, share_id, config))
                .collect(),
        }
    }
}

/// GET /api/shares/{share_id}/gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryResponse {
    /// Share header.
    pub share: ShareHeader,
    /// Image sections.
    pub sections: Vec<SectionDto>,
    /// Archive offered as "download all".
    pub download_all: Option<FileDto>,
}

impl GalleryResponse {
    /// Renders a gallery page.
    pub fn from_page(page: &GalleryPage, config: &GalleryConfig) -> Self {
        let share_id = page.share.id.as_str();
        Self {
            share: ShareHeader::from(&page.share),
            sections: sections_dto(&page.sections, share_id, config),
            download_all: page
                .download_all_archive
                .as_ref()
                .map(|f| FileDto::from_record(f, share_id, config)),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

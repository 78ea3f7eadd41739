//! Gallery page assembly.

use std::sync::Arc;

use sharegallery_core::config::GalleryConfig;
use sharegallery_core::error::AppError;
use sharegallery_entity::file::{FileRecord, is_archive, is_image};
use sharegallery_entity::section::{ArchiveGallery, Section};
use sharegallery_entity::share::Share;

use crate::share::ShareAccess;

use super::archive::build_archive_galleries;
use super::listing::{ListingSummary, summarize};
use super::sections::build_sections;

/// Content of a share's gallery page.
#[derive(Debug, Clone)]
pub struct GalleryPage {
    /// The share.
    pub share: Share,
    /// Image sections over the whole share.
    pub sections: Vec<Section>,
    /// Archive offered for downloading everything at once.
    pub download_all_archive: Option<FileRecord>,
}

/// Content of a share's landing page.
#[derive(Debug, Clone)]
pub struct ShareOverview {
    /// The share.
    pub share: Share,
    /// Files at the share root.
    pub root_files: Vec<FileRecord>,
    /// Count and size summary of `root_files`.
    pub summary: ListingSummary,
    /// Image galleries of the root archives.
    pub archives: Vec<ArchiveGallery>,
}

/// Builds gallery and overview pages for shares.
#[derive(Debug, Clone)]
pub struct GalleryService {
    /// Share source.
    access: Arc<dyn ShareAccess>,
    /// Gallery settings.
    config: GalleryConfig,
}

impl GalleryService {
    /// Creates a new gallery service.
    pub fn new(access: Arc<dyn ShareAccess>, config: GalleryConfig) -> Self {
        Self { access, config }
    }

    /// Fetches a share, rejecting blank ids before they reach the store.
    async fn fetch_share(&self, share_id: &str) -> Result<Share, AppError> {
        if share_id.trim().is_empty() {
            return Err(AppError::validation("Share id must not be empty"));
        }
        self.access.get_share(share_id).await
    }

    /// Builds the gallery page: every image of the share, grouped by folder.
    pub async fn gallery(&self, share_id: &str) -> Result<GalleryPage, AppError> {
        let share = self.fetch_share(share_id).await?;

        let images: Vec<FileRecord> = share
            .files
            .iter()
            .filter(|f| is_image(&f.name))
            .cloned()
            .collect();
        let sections = build_sections(&images);

        let download_all_archive = share
            .files
            .iter()
            .find(|f| is_archive(&f.name, &self.config.archive_extension))
            .cloned();

        tracing::debug!(
            share_id = %share.id,
            images = images.len(),
            sections = sections.len(),
            "Built gallery page"
        );

        Ok(GalleryPage {
            share,
            sections,
            download_all_archive,
        })
    }

    /// Builds the overview page: root file list, its summary, and one
    /// gallery per root archive.
    pub async fn overview(&self, share_id: &str) -> Result<ShareOverview, AppError> {
        let share = self.fetch_share(share_id).await?;

        let root_files = share.root_files();
        let summary = summarize(&root_files);
        let archives = build_archive_galleries(&share.files, &self.config.archive_extension);

        tracing::debug!(
            share_id = %share.id,
            root_files = root_files.len(),
            archives = archives.len(),
            "Built share overview"
        );

        Ok(ShareOverview {
            share,
            root_files,
            summary,
            archives,
        })
    }
}

#[cfg(test)]
mod tests {
    use sharegallery_core::error::ErrorKind;

    use super::*;
    use crate::share::ManifestShareStore;

    fn service() -> GalleryService {
        let share = Share {
            id: "trip".to_string(),
            name: Some("Trip".to_string()),
            description: Some("Summer".to_string()),
            files: vec![
                FileRecord::new("1", "notes.txt", "100"),
                FileRecord::new("2", "photos.zip", "5000"),
                FileRecord::new("3", "photos.zip/day2/b.png", "10"),
                FileRecord::new("4", "photos.zip/day1/a.jpg", "10"),
                FileRecord::new("5", "cover.png", "300"),
                FileRecord::new("6", "photos.zip/day1/notes.txt", "10"),
            ],
            expiration: None,
            removed: false,
            private: false,
        };
        let store = ManifestShareStore::from_shares(vec![share]);
        GalleryService::new(Arc::new(store), GalleryConfig::default())
    }

    #[tokio::test]
    async fn test_gallery_page() {
        let page = service().gallery("trip").await.unwrap();

        let paths: Vec<&str> = page.sections.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["", "photos.zip/day1", "photos.zip/day2"]);
        assert_eq!(page.sections[0].files[0].id, "5");
        assert_eq!(page.sections[1].files.len(), 1);
        assert_eq!(page.download_all_archive.map(|f| f.id).as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_overview_page() {
        let overview = service().overview("trip").await.unwrap();

        let root_ids: Vec<&str> = overview.root_files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(root_ids, vec!["1", "2", "5"]);
        assert_eq!(overview.summary.file_count, 3);
        assert_eq!(overview.summary.total_size_bytes, 5400);

        assert_eq!(overview.archives.len(), 1);
        let sections = &overview.archives[0].sections;
        let paths: Vec<&str> = sections.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["day1", "day2"]);
    }

    #[tokio::test]
    async fn test_unknown_share_propagates() {
        let err = service().gallery("missing").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_blank_share_id_rejected() {
        let err = service().overview("  ").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service().gallery("").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}

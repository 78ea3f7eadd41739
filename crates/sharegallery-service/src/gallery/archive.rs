//! Per-archive image galleries.
//!
//! Images extracted from an archive are listed with the archive name as
//! their first path segment (`holiday.zip/day1/beach.png`). Each archive at
//! the share root gets its own gallery whose sections are keyed by the
//! path inside the archive.

use std::collections::HashMap;

use sharegallery_entity::file::{FileRecord, is_archive, is_image};
use sharegallery_entity::section::ArchiveGallery;

use super::sections::build_sections_by;

/// Path of a nested file relative to its archive: everything after the
/// first `/`.
fn relative_path(name: &str) -> &str {
    name.split_once('/').map_or("", |(_, rest)| rest)
}

/// Builds one gallery per root-level archive that has nested images.
///
/// Galleries follow the order of the archives among the share files.
/// Archives without images are skipped, and nested images whose first
/// segment names no root archive are left out.
pub fn build_archive_galleries(
    files: &[FileRecord],
    archive_extension: &str,
) -> Vec<ArchiveGallery> {
    let mut images_by_archive: HashMap<&str, Vec<FileRecord>> = HashMap::new();
    for file in files {
        if file.is_root_level() || !is_image(&file.name) {
            continue;
        }
        if let Some((archive_name, _)) = file.name.split_once('/') {
            images_by_archive
                .entry(archive_name)
                .or_default()
                .push(file.clone());
        }
    }

    files
        .iter()
        .filter(|f| f.is_root_level() && is_archive(&f.name, archive_extension))
        .filter_map(|archive| {
            let images = images_by_archive.get(archive.name.as_str())?;
            let sections = build_sections_by(images, |image| relative_path(&image.name));
            tracing::debug!(
                archive = %archive.name,
                images = images.len(),
                sections = sections.len(),
                "Built archive gallery"
            );
            Some(ArchiveGallery {
                archive: archive.clone(),
                sections,
            })
        })
        .collect()
}

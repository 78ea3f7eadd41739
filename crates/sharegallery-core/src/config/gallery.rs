//! Gallery and share-manifest configuration.

use serde::{Deserialize, Serialize};

/// Settings for building share galleries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Path to the JSON manifest describing the served shares.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
    /// File-name suffix identifying archive containers (e.g. `.zip`).
    #[serde(default = "default_archive_extension")]
    pub archive_extension: String,
    /// Prefix of the external file retrieval service, joined as
    /// `{prefix}/{share_id}/files/{file_id}`. This server does not serve
    /// file contents itself, so the default assumes the retrieval service
    /// is mounted at `/api/shares` on the same host (e.g. behind a reverse
    /// proxy).
    #[serde(default = "default_file_url_prefix")]
    pub file_url_prefix: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            archive_extension: default_archive_extension(),
            file_url_prefix: default_file_url_prefix(),
        }
    }
}

impl GalleryConfig {
    /// Build the retrieval URL for a file of a share.
    pub fn file_url(&self, share_id: &str, file_id: &str) -> String {
        format!(
            "{}/{share_id}/files/{file_id}",
            self.file_url_prefix.trim_end_matches('/')
        )
    }
}

fn default_manifest_path() -> String {
    "data/shares.json".to_string()
}

fn default_archive_extension() -> String {
    ".zip".to_string()
}

fn default_file_url_prefix() -> String {
    "/api/shares".to_string()
}

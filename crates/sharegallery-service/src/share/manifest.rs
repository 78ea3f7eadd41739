//! Manifest-backed share store.
//!
//! Shares are read once from a JSON manifest of the form
//! `{"shares": [ ... ]}` and served from memory.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sharegallery_core::error::{AppError, ErrorKind};
use sharegallery_core::result::AppResult;
use sharegallery_entity::share::{Share, ShareManifest};

use super::access::ShareAccess;

/// In-memory share store loaded from a manifest file.
#[derive(Debug, Clone, Default)]
pub struct ManifestShareStore {
    /// Shares keyed by id.
    shares: HashMap<String, Share>,
}

impl ManifestShareStore {
    /// Creates a store from a list of shares. A later share replaces an
    /// earlier one with the same id.
    pub fn from_shares(shares: Vec<Share>) -> Self {
        let mut map = HashMap::with_capacity(shares.len());
        for share in shares {
            if let Some(previous) = map.insert(share.id.clone(), share) {
                tracing::warn!(share_id = %previous.id, "Duplicate share id in manifest");
            }
        }
        Self { shares: map }
    }

    /// Loads the manifest at `path`. A missing file yields an empty store.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Share manifest not found, serving no shares");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read share manifest '{}': {e}", path.display()),
                    e,
                ));
            }
        };

        let manifest: ShareManifest = serde_json::from_str(&contents).map_err(|e| {
            AppError::serialization(format!(
                "Invalid share manifest '{}': {e}",
                path.display()
            ))
        })?;

        let store = Self::from_shares(manifest.shares);
        tracing::info!(path = %path.display(), shares = store.len(), "Loaded share manifest");
        Ok(store)
    }

    /// Number of shares in the store.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Check if the store holds no shares.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Looks up a share and validates it is viewable at `now`.
    fn lookup(&self, share_id: &str, now: DateTime<Utc>) -> AppResult<Share> {
        let share = self
            .shares
            .get(share_id)
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        if share.removed {
            return Err(AppError::gone("Share has been removed"));
        }
        if share.is_expired_at(now) {
            return Err(AppError::gone("Share has expired"));
        }
        if share.private {
            return Err(AppError::forbidden("Share is private"));
        }

        Ok(share.clone())
    }
}

#[async_trait]
impl ShareAccess for ManifestShareStore {
    async fn get_share(&self, share_id: &str) -> AppResult<Share> {
        self.lookup(share_id, Utc::now())
    }
}

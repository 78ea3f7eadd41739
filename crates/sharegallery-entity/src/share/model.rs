//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::file::FileRecord;

/// A share: a named set of files published under one identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Share {
    /// Share identifier, used in URLs.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description shown under the title.
    #[serde(default)]
    pub description: Option<String>,
    /// Files of the share, in upload order.
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// When the share expires.
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
    /// Whether the share was removed by its owner.
    #[serde(default)]
    pub removed: bool,
    /// Whether the share is private (not viewable through public links).
    #[serde(default)]
    pub private: bool,
}

impl Share {
    /// The title to display: the share name, falling back to its id when
    /// the name is missing or empty.
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }

    /// Check if the share has expired at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expires| expires <= now)
    }

    /// Files with no folder component, in share order.
    pub fn root_files(&self) -> Vec<FileRecord> {
        self.files
            .iter()
            .filter(|f| f.is_root_level())
            .cloned()
            .collect()
    }
}

/// On-disk manifest listing every served share.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareManifest {
    /// All shares.
    #[serde(default)]
    pub shares: Vec<Share>,
}

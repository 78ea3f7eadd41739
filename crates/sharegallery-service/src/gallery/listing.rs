//! Size and count summary of a share's root file list.

use serde::{Deserialize, Serialize};

use sharegallery_entity::file::FileRecord;

/// Summary shown above a share's file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Number of listed files.
    pub file_count: usize,
    /// Sum of the listed file sizes in bytes.
    pub total_size_bytes: u64,
    /// `total_size_bytes` in binary units, e.g. `"1.5 MiB"`.
    pub total_size_human: String,
    /// Whether a "download all" action is offered.
    pub download_all: bool,
}

/// Summarizes a list of files. Sizes that do not parse count as zero.
pub fn summarize(files: &[FileRecord]) -> ListingSummary {
    let total_size_bytes = files
        .iter()
        .map(|file| {
            file.size_bytes().unwrap_or_else(|| {
                tracing::warn!(file_id = %file.id, size = %file.size, "Unparsable file size");
                0
            })
        })
        .fold(0u64, u64::saturating_add);

    ListingSummary {
        file_count: files.len(),
        total_size_bytes,
        total_size_human: human_size(total_size_bytes),
        download_all: files.len() > 1,
    }
}

/// Formats a byte count with binary units and one decimal.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    loop {
        value /= THRESHOLD;
        // Stop once the rounded value stays below the next threshold.
        if (value * 10.0).round() / 10.0 < THRESHOLD || unit == UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}

//! Share access trait — the seam through which shares are fetched.

use async_trait::async_trait;

use sharegallery_core::result::AppResult;
use sharegallery_entity::share::Share;

/// Source of shares for the gallery pages.
///
/// Implementations decide whether a share may be shown and report the
/// outcome through the error kind: `NotFound` for unknown ids, `Gone` for
/// removed or expired shares, `Forbidden` for private ones.
#[async_trait]
pub trait ShareAccess: Send + Sync + std::fmt::Debug {
    /// Fetch a viewable share by id.
    async fn get_share(&self, share_id: &str) -> AppResult<Share>;
}

//! Public share page handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{ApiResponse, GalleryResponse, ShareOverviewResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/shares/{share_id} — root file list and archive galleries
pub async fn get_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<ApiResponse<ShareOverviewResponse>>, ApiError> {
    let overview = state.gallery_service.overview(&share_id).await?;
    let body = ShareOverviewResponse::from_overview(&overview, &state.config.gallery);
    Ok(Json(ApiResponse::ok(body)))
}

/// GET /api/shares/{share_id}/gallery — every image grouped by folder
pub async fn get_gallery(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<ApiResponse<GalleryResponse>>, ApiError> {
    let page = state.gallery_service.gallery(&share_id).await?;
    let body = GalleryResponse::from_page(&page, &state.config.gallery);
    Ok(Json(ApiResponse::ok(body)))
}

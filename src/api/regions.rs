//! Region API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{success, validated, ApiResult};
use crate::models::{CreateRegionRequest, Region};
use crate::AppState;

/// GET /api/regions - List all regions.
pub async fn list_regions(State(state): State<AppState>) -> ApiResult<Vec<Region>> {
    success(state.repo.list_regions().await?)
}

/// POST /api/regions - Create a region.
pub async fn create_region(
    State(state): State<AppState>,
    payload: Result<Json<CreateRegionRequest>, JsonRejection>,
) -> ApiResult<Region> {
    let request = validated(payload)?;
    let region = state.repo.create_region(&request).await?;
    tracing::info!(slug = %region.slug, "Region created");
    success(region)
}

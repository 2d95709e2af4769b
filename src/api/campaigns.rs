//! Campaign API endpoints: campaigns, their arguments, WIP counters and
//! entry export.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{load_campaign, success, validated, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Argument, Campaign, CreateArgumentRequest, CreateCampaignRequest, EntryExport,
    UpsertWipCountRequest, WipCount,
};
use crate::AppState;

/// GET /api/campaigns - List all campaigns.
pub async fn list_campaigns(State(state): State<AppState>) -> ApiResult<Vec<Campaign>> {
    success(state.repo.list_campaigns().await?)
}

/// POST /api/campaigns - Create a campaign.
pub async fn create_campaign(
    State(state): State<AppState>,
    payload: Result<Json<CreateCampaignRequest>, JsonRejection>,
) -> ApiResult<Campaign> {
    let request = validated(payload)?;
    let campaign = state.repo.create_campaign(&request).await?;
    tracing::info!(slug = %campaign.slug, regions = campaign.regions.len(), "Campaign created");
    success(campaign)
}

/// GET /api/campaigns/:slug/arguments - List a campaign's arguments.
pub async fn list_arguments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<Argument>> {
    let campaign = load_campaign(&state, &slug).await?;
    success(state.repo.list_arguments(campaign.id).await?)
}

/// POST /api/campaigns/:slug/arguments - Add an argument.
pub async fn create_argument(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<CreateArgumentRequest>, JsonRejection>,
) -> ApiResult<Argument> {
    let campaign = load_campaign(&state, &slug).await?;
    let request = validated(payload)?;
    success(state.repo.create_argument(campaign.id, &request).await?)
}

/// GET /api/campaigns/:slug/wip - List a campaign's WIP counters.
pub async fn list_wip_counts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<WipCount>> {
    let campaign = load_campaign(&state, &slug).await?;
    success(state.repo.list_wip_counts(campaign.id).await?)
}

/// PUT /api/campaigns/:slug/wip/:politician - Set a politician's WIP counter.
pub async fn upsert_wip_count(
    State(state): State<AppState>,
    Path((slug, politician_slug)): Path<(String, String)>,
    payload: Result<Json<UpsertWipCountRequest>, JsonRejection>,
) -> ApiResult<WipCount> {
    let campaign = load_campaign(&state, &slug).await?;
    let politician = state
        .repo
        .get_politician_by_slug(&politician_slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Politician {} not found", politician_slug)))?;
    let request = validated(payload)?;

    let wip = state
        .repo
        .upsert_wip_count(campaign.id, politician.id, request.status, request.voted)
        .await?;
    success(wip)
}

/// GET /api/campaigns/:slug/entries - Export every entry with contact details.
pub async fn export_entries(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<EntryExport>> {
    let campaign = load_campaign(&state, &slug).await?;
    success(state.repo.export_entries(campaign.id).await?)
}

//! Campaign index and regional listings.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rand::seq::SliceRandom;
use serde::Serialize;

use super::{parse_locale, CurrentCampaign, Page};
use crate::errors::AppError;
use crate::locale::{found, Locale};
use crate::models::{is_region_id, is_region_slug, Campaign, EntryView, PoliticianListing, Region};
use crate::AppState;

/// How many recent entries the listing pages show.
const LATEST_ENTRIES: i64 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingData {
    pub campaign: Campaign,
    pub politicians: Vec<PoliticianListing>,
    pub latest_entries: Vec<EntryView>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

/// GET /{locale}/ - Campaign index.
pub async fn index(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path(locale): Path<String>,
) -> Result<Page<ListingData>, AppError> {
    let locale = parse_locale(&locale)?;
    let politicians = state.repo.politicians_for_campaign(&campaign).await?;
    listing(&state, locale, campaign, politicians, None).await
}

/// GET /{locale}/{region} - Politicians of one region.
///
/// A numeric segment addresses the region by id and redirects to its slug.
pub async fn region(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, region)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;

    if is_region_id(&region) {
        let id: i64 = region
            .parse()
            .map_err(|_| AppError::NotFound(format!("Region {} not found", region)))?;
        let region = state
            .repo
            .get_region(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Region {} not found", id)))?;
        return Ok(found(&format!("/{}/{}", locale, region.slug)));
    }

    if !is_region_slug(&region) {
        return Err(AppError::NotFound(format!("Region {} not found", region)));
    }

    let region = state
        .repo
        .get_region_by_slug(&region)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Region {} not found", region)))?;

    let politicians = state.repo.politicians_in_region(&campaign, &region).await?;
    let page = listing(&state, locale, campaign, politicians, Some(region)).await?;
    Ok(page.into_response())
}

async fn listing(
    state: &AppState,
    locale: Locale,
    campaign: Campaign,
    politicians: Vec<PoliticianListing>,
    region: Option<Region>,
) -> Result<Page<ListingData>, AppError> {
    let mut latest_entries = state.repo.latest_entries(campaign.id, LATEST_ENTRIES).await?;
    latest_entries.shuffle(&mut rand::rng());
    let total = state.repo.count_entries(campaign.id).await?;

    Ok(Page::new(
        "campaign/index",
        locale,
        ListingData {
            campaign,
            politicians,
            latest_entries,
            total,
            region,
        },
    ))
}

//! Thank-you, check-your-inbox and statement pages.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::{parse_id, parse_locale, CurrentCampaign, Page};
use crate::errors::AppError;
use crate::locale::found;
use crate::models::{Campaign, EntryView};
use crate::AppState;

/// How many confirmed statements the statements page lists.
const STATEMENTS_LIMIT: i64 = 50;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub campaign: Campaign,
    pub campaign_entry: EntryView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementsData {
    pub campaign: Campaign,
    pub statements: Vec<EntryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_entry: Option<EntryView>,
}

#[derive(Debug, Deserialize)]
pub struct StatementsQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// GET /{locale}/thanks/{id} - Thank-you page after a confirmed submission.
pub async fn thanks(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, id)): Path<(String, String)>,
) -> Result<Page<EntryData>, AppError> {
    entry_page(&state, "campaign/thanks", campaign, &locale, &id).await
}

/// GET /{locale}/confirm/{id} - "Check your inbox" page.
pub async fn confirm(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, id)): Path<(String, String)>,
) -> Result<Page<EntryData>, AppError> {
    entry_page(&state, "campaign/confirm", campaign, &locale, &id).await
}

/// GET /{locale}/statements - Confirmed statements of the campaign.
///
/// `?id=N` is the legacy form of `/statement/N` and redirects there.
pub async fn statements(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path(locale): Path<String>,
    Query(query): Query<StatementsQuery>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;

    if let Some(id) = query.id.and_then(|id| id.parse::<i64>().ok()).filter(|id| *id > 0) {
        return Ok(found(&format!("/{}/statement/{}", locale, id)));
    }

    let statements = state
        .repo
        .confirmed_entries(campaign.id, STATEMENTS_LIMIT)
        .await?;

    let page = Page::new(
        "campaign/statements",
        locale,
        StatementsData {
            campaign,
            statements,
            campaign_entry: None,
        },
    );
    Ok(page.into_response())
}

/// GET /{locale}/statement/{id} - Statements page focused on one entry.
pub async fn statement(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, id)): Path<(String, String)>,
) -> Result<Page<StatementsData>, AppError> {
    let locale = parse_locale(&locale)?;
    let entry = load_entry(&state, &campaign, &id).await?;
    let statements = state
        .repo
        .confirmed_entries(campaign.id, STATEMENTS_LIMIT)
        .await?;

    Ok(Page::new(
        "campaign/statements",
        locale,
        StatementsData {
            campaign,
            statements,
            campaign_entry: Some(entry),
        },
    ))
}

async fn entry_page(
    state: &AppState,
    template: &'static str,
    campaign: Campaign,
    locale: &str,
    id: &str,
) -> Result<Page<EntryData>, AppError> {
    let locale = parse_locale(locale)?;
    let campaign_entry = load_entry(state, &campaign, id).await?;

    Ok(Page::new(
        template,
        locale,
        EntryData {
            campaign,
            campaign_entry,
        },
    ))
}

async fn load_entry(state: &AppState, campaign: &Campaign, id: &str) -> Result<EntryView, AppError> {
    let id = parse_id(id)?;
    state
        .repo
        .get_entry_view(campaign.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign entry {} not found", id)))
}

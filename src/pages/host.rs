//! Campaign resolution from the request host.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::errors::AppError;
use crate::models::{is_campaign_slug, Campaign};
use crate::AppState;

/// The campaign addressed by the `{campaign}.{domain}` host.
pub struct CurrentCampaign(pub Campaign);

impl FromRequestParts<AppState> for CurrentCampaign {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.host())
            .unwrap_or_default();

        let slug = campaign_slug_from_host(host, &state.config.domain)
            .ok_or_else(|| AppError::NotFound(format!("No campaign on host {}", host)))?;

        let campaign = state
            .repo
            .get_campaign_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", slug)))?;

        Ok(CurrentCampaign(campaign))
    }
}

/// Extract the campaign label from `{campaign}.{domain}[:port]`.
pub fn campaign_slug_from_host(host: &str, domain: &str) -> Option<String> {
    let host = host.trim().to_ascii_lowercase();
    let host = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name.to_string(),
        _ => host,
    };
    let domain = domain.trim().trim_start_matches('.').to_ascii_lowercase();

    let label = host.strip_suffix(&domain)?.strip_suffix('.')?;
    if label.contains('.') || !is_campaign_slug(label) {
        return None;
    }
    Some(label.to_string())
}

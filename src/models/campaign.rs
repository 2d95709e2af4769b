//! Campaign model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Region;

/// A named advocacy campaign, served on its own subdomain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Which kind of politician the campaign lobbies, e.g. `national_council`
    pub politician_type: String,
    /// Region scope; empty means the campaign spans every region
    pub regions: Vec<Region>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a campaign.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    #[validate(custom(function = "validate_campaign_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 64, message = "Politician type is required"))]
    pub politician_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
}

/// Campaign slugs double as host labels: word characters and dashes.
/// Campaign slugs are host labels, so only lowercase ASCII letters, digits,
/// underscores and dashes.
pub fn is_campaign_slug(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_slug_char(c) || c == '-')
}

pub(crate) fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn validate_campaign_slug(slug: &str) -> Result<(), ValidationError> {
    if is_campaign_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("campaign_slug")
            .with_message("Campaign slug may only contain lowercase letters, digits, underscores and dashes".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_slug_shape() {
        assert!(is_campaign_slug("klima-2024"));
        assert!(is_campaign_slug("velo_initiative"));
        assert!(!is_campaign_slug(""));
        assert!(!is_campaign_slug("a.b"));
    }

    #[test]
    fn test_campaign_slug_is_lowercase_ascii() {
        assert!(!is_campaign_slug("Velo"));
        assert!(!is_campaign_slug("klimä"));
        assert!(is_campaign_slug("velo"));
    }
}

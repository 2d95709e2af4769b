//! Politician model.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::campaign::is_slug_char;
use super::{Region, WipCount};

/// The target of lobbying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    pub id: i64,
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    pub politician_type: String,
    pub regions: Vec<Region>,
}

impl Politician {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A politician as listed on a campaign page, with its response counter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticianListing {
    #[serde(flatten)]
    pub politician: Politician,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip: Option<WipCount>,
}

/// Request body for creating a politician.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoliticianRequest {
    #[validate(custom(function = "validate_politician_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Politician type is required"))]
    pub politician_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
}

/// Politician slugs allow word characters, dots and dashes (`anna.muster`).
pub fn is_politician_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| is_slug_char(c) || c == '-' || c == '.')
}

fn validate_politician_slug(slug: &str) -> Result<(), ValidationError> {
    if is_politician_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("politician_slug")
            .with_message("Politician slug may only contain lowercase letters, digits, underscores, dots and dashes".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_politician_slug_shape() {
        assert!(is_politician_slug("anna.muster"));
        assert!(is_politician_slug("jean-luc_2"));
        assert!(!is_politician_slug("anna muster"));
        assert!(!is_politician_slug("a/b"));
        assert!(!is_politician_slug("Anna.Muster"));
        assert!(!is_politician_slug("rené.muster"));
    }

    #[test]
    fn test_listing_flattens_politician() {
        let listing = PoliticianListing {
            politician: Politician {
                id: 3,
                slug: "anna.muster".into(),
                first_name: "Anna".into(),
                last_name: "Muster".into(),
                party: None,
                politician_type: "national_council".into(),
                regions: vec![],
            },
            wip: None,
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["slug"], "anna.muster");
        assert_eq!(value["firstName"], "Anna");
        assert!(value.get("wip").is_none());
        assert!(value.get("party").is_none());
    }
}

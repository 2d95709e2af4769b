//! Region model.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::campaign::is_slug_char;

/// A geographic grouping politicians are elected in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

/// Request body for creating a region.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionRequest {
    #[validate(custom(function = "validate_region_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

/// Region slugs are exactly two word characters, e.g. `zh` or `be`.
pub fn is_region_slug(s: &str) -> bool {
    s.len() == 2 && s.chars().all(is_slug_char)
}

/// A path segment that addresses a region by numeric id.
pub fn is_region_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn validate_region_slug(slug: &str) -> Result<(), ValidationError> {
    if is_region_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("region_slug")
            .with_message("Region slug must be two lowercase letters, digits or underscores".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_slug_shape() {
        assert!(is_region_slug("zh"));
        assert!(is_region_slug("b_"));
        assert!(!is_region_slug("z"));
        assert!(!is_region_slug("zhh"));
        assert!(!is_region_slug("z-"));
        assert!(!is_region_slug("ZH"));
        assert!(!is_region_slug("zü"));
    }

    #[test]
    fn test_region_id_shape() {
        assert!(is_region_id("12"));
        assert!(!is_region_id(""));
        assert!(!is_region_id("1a"));
    }

    #[test]
    fn test_create_region_validation() {
        let ok = CreateRegionRequest {
            slug: "be".into(),
            name: "Bern".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateRegionRequest {
            slug: "bern".into(),
            name: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("slug"));
        assert!(fields.contains_key("name"));
    }
}

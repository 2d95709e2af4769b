//! Argument model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A predefined talking point visitors can send to a politician.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub id: i64,
    pub campaign_id: i64,
    pub title: String,
    pub text: String,
}

/// Request body for adding an argument to a campaign.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArgumentRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

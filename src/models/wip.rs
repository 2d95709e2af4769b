//! Work-in-progress counters of politician responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Aggregate response status of one politician within one campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WipCount {
    pub id: i64,
    pub campaign_id: i64,
    pub politician_id: i64,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voted: Option<i64>,
}

/// Request body for setting a politician's counter.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWipCountRequest {
    #[validate(range(min = 0, message = "Status must not be negative"))]
    pub status: i64,
    #[serde(default)]
    #[validate(range(min = 0, message = "Voted must not be negative"))]
    pub voted: Option<i64>,
}

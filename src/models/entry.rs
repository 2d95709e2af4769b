//! Campaign entry model.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// Display colours an entry may be drawn with.
pub const ENTRY_COLORS: [&str; 6] = [
    "#e6007e", "#009fe3", "#95c11f", "#ffcc00", "#f39200", "#662483",
];

/// One person's argument sent to one politician within a campaign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignEntry {
    pub id: i64,
    pub person_id: i64,
    pub campaign_id: i64,
    pub politician_id: i64,
    pub argument_id: i64,
    pub opt_in_information: bool,
    pub confirmed: bool,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Pick a display colour for a new entry.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    ENTRY_COLORS[rng.random_range(0..ENTRY_COLORS.len())].to_string()
}

/// An entry joined with the names shown on public pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub politician_slug: String,
    pub politician_name: String,
    pub argument_id: i64,
    pub argument_title: String,
    pub color: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

/// An entry as exported through the admin API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryExport {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub politician_slug: String,
    pub argument_id: i64,
    pub opt_in_information: bool,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

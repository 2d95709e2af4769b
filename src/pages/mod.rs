//! Public campaign pages.
//!
//! Every page answers with a view model naming the template a front end
//! renders it with.

mod entries;
mod host;
mod listing;
mod lobby;

pub use entries::*;
pub use host::*;
pub use listing::*;
pub use lobby::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::locale::Locale;

/// View model envelope for a rendered page.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub template: &'static str,
    pub locale: Locale,
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(template: &'static str, locale: Locale, data: T) -> Self {
        Self {
            template,
            locale,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Locale from a path segment; unsupported locales do not exist.
pub fn parse_locale(raw: &str) -> Result<Locale, AppError> {
    Locale::from_str(raw).ok_or_else(|| AppError::NotFound(format!("Unknown locale {}", raw)))
}

/// Numeric id from a path segment.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("No entry {}", raw)))
}

/// Fallback for unmatched public paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

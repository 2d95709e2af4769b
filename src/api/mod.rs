//! Admin API module.
//!
//! JSON endpoints for maintaining campaign data, guarded by the PSK layer.

mod campaigns;
mod politicians;
mod regions;

pub use campaigns::*;
pub use politicians::*;
pub use regions::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::Campaign;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
    })
}

/// Unwrap a JSON body and run its validation rules.
pub fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.validate()?;
    Ok(request)
}

async fn load_campaign(state: &AppState, slug: &str) -> Result<Campaign, AppError> {
    state
        .repo
        .get_campaign_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", slug)))
}

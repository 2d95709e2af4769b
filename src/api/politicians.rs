//! Politician API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{success, validated, ApiResult};
use crate::models::{CreatePoliticianRequest, Politician};
use crate::AppState;

/// GET /api/politicians - List all politicians.
pub async fn list_politicians(State(state): State<AppState>) -> ApiResult<Vec<Politician>> {
    success(state.repo.list_politicians().await?)
}

/// POST /api/politicians - Create a politician.
pub async fn create_politician(
    State(state): State<AppState>,
    payload: Result<Json<CreatePoliticianRequest>, JsonRejection>,
) -> ApiResult<Politician> {
    let request = validated(payload)?;
    let politician = state.repo.create_politician(&request).await?;
    tracing::info!(slug = %politician.slug, "Politician created");
    success(politician)
}

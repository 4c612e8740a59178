use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backlinks::discovery::{
    discover_opportunities, opportunity_to_backlink, BacklinkOpportunity,
};
use crate::errors::{AppError, AppJson};
use crate::models::site::{BacklinkRow, BacklinkStatus};
use crate::state::AppState;
use crate::store;

/// GET /api/backlinks/:website_id
pub async fn handle_list(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Vec<BacklinkRow>>, AppError> {
    let backlinks = store::backlinks::list_by_website(&state.db, website_id).await?;
    Ok(Json(backlinks))
}

/// GET /api/backlinks/:website_id/pending
pub async fn handle_pending(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Vec<BacklinkRow>>, AppError> {
    let backlinks = store::backlinks::list_pending(&state.db, website_id).await?;
    Ok(Json(backlinks))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverRequest {
    pub domain: String,
    #[serde(default)]
    pub target_keywords: Vec<String>,
    pub niche: String,
}

#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    pub opportunities: Vec<BacklinkOpportunity>,
}

/// POST /api/backlinks/discover
///
/// Returns opportunities without persisting anything.
pub async fn handle_discover(
    State(state): State<AppState>,
    AppJson(request): AppJson<DiscoverRequest>,
) -> Result<Json<DiscoverResponse>, AppError> {
    if request.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    let opportunities = discover_opportunities(
        &state.llm,
        &request.domain,
        &request.target_keywords,
        &request.niche,
    )
    .await?;

    Ok(Json(DiscoverResponse { opportunities }))
}

/// POST /api/backlinks/:website_id/discover
///
/// Discovers opportunities and saves each one as a pending backlink row.
pub async fn handle_discover_and_save(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
    AppJson(request): AppJson<DiscoverRequest>,
) -> Result<Json<Vec<BacklinkRow>>, AppError> {
    if request.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    if store::websites::get(&state.db, website_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Unknown websiteId {website_id}"
        )));
    }

    let opportunities = discover_opportunities(
        &state.llm,
        &request.domain,
        &request.target_keywords,
        &request.niche,
    )
    .await?;

    let mut saved = Vec::with_capacity(opportunities.len());
    for (index, opportunity) in opportunities.iter().enumerate() {
        let backlink = opportunity_to_backlink(
            website_id,
            &request.domain,
            &request.target_keywords,
            index,
            opportunity,
        );
        saved.push(store::backlinks::create(&state.db, &backlink).await?);
    }

    info!(website_id, count = saved.len(), "backlink opportunities saved");
    Ok(Json(saved))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
}

/// PATCH /api/backlinks/:id/status
///
/// Only the three known statuses are accepted; anything else is a 400 and no
/// row is touched.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    let status: BacklinkStatus = request
        .status
        .parse()
        .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

    let affected = store::backlinks::update_status(&state.db, id, status).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("Backlink {id} not found")));
    }

    Ok(Json(StatusUpdateResponse { success: true }))
}

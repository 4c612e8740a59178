use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::audit::scorer::score;
use crate::errors::{AppError, AppJson};
use crate::models::analysis::TechnicalAuditRow;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    pub domain: String,
}

/// POST /api/audit/:website_id
///
/// Loads the domain's page, scores it and persists a fresh audit row.
pub async fn handle_run_audit(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
    AppJson(request): AppJson<AuditRequest>,
) -> Result<Json<TechnicalAuditRow>, AppError> {
    if request.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    if store::websites::get(&state.db, website_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Unknown websiteId {website_id}"
        )));
    }

    let snapshot = state.fetcher.fetch(&request.domain).await?;
    let outcome = score(&snapshot);

    info!(
        website_id,
        page_speed = outcome.page_speed,
        issues = outcome.issues.len(),
        load_time_ms = snapshot.load_time_ms,
        "technical audit completed"
    );

    let row = store::audits::create(&state.db, website_id, &outcome).await?;
    Ok(Json(row))
}

/// GET /api/audit/:website_id/latest
///
/// Serializes to `null` when no audit has been run yet.
pub async fn handle_latest_audit(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Option<TechnicalAuditRow>>, AppError> {
    let audit = store::audits::latest_by_website(&state.db, website_id).await?;
    Ok(Json(audit))
}

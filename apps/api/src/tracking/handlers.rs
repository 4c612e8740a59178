//! Rank tracking endpoints. Reads return persisted rows only; the update
//! fan-out collects a result per keyword so one failure does not abort the
//! rest of the batch.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AppError, AppJson};
use crate::models::site::KeywordRow;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedKeyword {
    pub id: i32,
    pub keyword: String,
    pub current_position: Option<i32>,
    pub previous_position: Option<i32>,
    pub search_volume: Option<i32>,
    pub difficulty: Option<i32>,
    pub url: Option<String>,
    pub last_checked: DateTime<Utc>,
}

impl From<KeywordRow> for TrackedKeyword {
    fn from(row: KeywordRow) -> Self {
        TrackedKeyword {
            id: row.id,
            keyword: row.keyword,
            current_position: row.current_position,
            previous_position: row.previous_position,
            search_volume: row.search_volume,
            difficulty: row.difficulty,
            url: row.target_url,
            last_checked: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrackingResponse {
    pub keywords: Vec<TrackedKeyword>,
}

/// GET /api/rank-tracking/:website_id
pub async fn handle_tracking(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<TrackingResponse>, AppError> {
    let keywords = store::keywords::list_by_website(&state.db, website_id).await?;
    Ok(Json(TrackingResponse {
        keywords: keywords.into_iter().map(TrackedKeyword::from).collect(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub website_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordUpdate {
    pub keyword_id: i32,
    pub keyword: String,
    pub new_position: Option<i32>,
    pub previous_position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub updates: Vec<KeywordUpdate>,
}

/// POST /api/rank-tracking/update
///
/// Checks every tracked keyword against the configured rank source. Each
/// keyword succeeds or fails independently; failures are reported per item.
pub async fn handle_update(
    State(state): State<AppState>,
    AppJson(request): AppJson<UpdateRequest>,
) -> Result<Json<UpdateResponse>, AppError> {
    let website = store::websites::get(&state.db, request.website_id)
        .await?
        .ok_or_else(|| {
            AppError::Validation(format!("Unknown websiteId {}", request.website_id))
        })?;

    let keywords = store::keywords::list_by_website(&state.db, request.website_id).await?;

    let mut updates = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let update = refresh_keyword(&state, &website.domain, keyword).await;
        updates.push(update);
    }

    Ok(Json(UpdateResponse {
        message: "Rankings updated successfully".to_string(),
        updates,
    }))
}

async fn refresh_keyword(state: &AppState, domain: &str, keyword: KeywordRow) -> KeywordUpdate {
    match state.rank_source.check_position(domain, &keyword.keyword).await {
        Ok(Some(position)) => {
            match store::keywords::update_position(&state.db, keyword.id, position).await {
                Ok(Some(updated)) => KeywordUpdate {
                    keyword_id: updated.id,
                    keyword: updated.keyword,
                    new_position: updated.current_position,
                    previous_position: updated.previous_position,
                    error: None,
                },
                Ok(None) => KeywordUpdate {
                    keyword_id: keyword.id,
                    keyword: keyword.keyword,
                    new_position: None,
                    previous_position: keyword.previous_position,
                    error: Some("keyword no longer exists".to_string()),
                },
                Err(e) => {
                    warn!("position update failed for keyword {}: {e}", keyword.id);
                    KeywordUpdate {
                        keyword_id: keyword.id,
                        keyword: keyword.keyword,
                        new_position: None,
                        previous_position: keyword.previous_position,
                        error: Some("failed to store new position".to_string()),
                    }
                }
            }
        }
        // no position available: report the keyword unchanged
        Ok(None) => KeywordUpdate {
            keyword_id: keyword.id,
            keyword: keyword.keyword,
            new_position: keyword.current_position,
            previous_position: keyword.previous_position,
            error: None,
        },
        Err(e) => {
            warn!("rank check failed for keyword {}: {e}", keyword.id);
            KeywordUpdate {
                keyword_id: keyword.id,
                keyword: keyword.keyword,
                new_position: keyword.current_position,
                previous_position: keyword.previous_position,
                error: Some("rank check failed".to_string()),
            }
        }
    }
}

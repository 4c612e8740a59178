//! Website and keyword CRUD plus the dashboard aggregate.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppJson};
use crate::models::site::{KeywordRow, NewKeyword, NewWebsite, WebsiteRow};
use crate::state::AppState;
use crate::store;

/// Single-tenant placeholder identity until real auth lands.
pub const DEFAULT_USER_ID: i32 = 1;

/// Dashboard traffic figure pending a real analytics integration.
const ORGANIC_TRAFFIC_PLACEHOLDER: i64 = 24_892;

/// GET /api/websites
pub async fn handle_list_websites(
    State(state): State<AppState>,
) -> Result<Json<Vec<WebsiteRow>>, AppError> {
    let websites = store::websites::list_by_user(&state.db, DEFAULT_USER_ID).await?;
    Ok(Json(websites))
}

/// POST /api/websites
pub async fn handle_create_website(
    State(state): State<AppState>,
    AppJson(request): AppJson<NewWebsite>,
) -> Result<Json<WebsiteRow>, AppError> {
    if request.domain.trim().is_empty() || request.name.trim().is_empty() {
        return Err(AppError::Validation("Invalid website data".to_string()));
    }

    let website = store::websites::create(&state.db, &request).await?;
    Ok(Json(website))
}

/// GET /api/keywords/:website_id
pub async fn handle_list_keywords(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Vec<KeywordRow>>, AppError> {
    let keywords = store::keywords::list_by_website(&state.db, website_id).await?;
    Ok(Json(keywords))
}

/// POST /api/keywords
pub async fn handle_create_keyword(
    State(state): State<AppState>,
    AppJson(request): AppJson<NewKeyword>,
) -> Result<Json<KeywordRow>, AppError> {
    if request.keyword.trim().is_empty() {
        return Err(AppError::Validation("Invalid keyword data".to_string()));
    }

    if store::websites::get(&state.db, request.website_id)
        .await?
        .is_none()
    {
        return Err(AppError::Validation(format!(
            "Unknown websiteId {}",
            request.website_id
        )));
    }

    let keyword = store::keywords::create(&state.db, &request).await?;
    Ok(Json(keyword))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_keywords: i64,
    pub avg_position: f64,
    pub total_backlinks: i64,
    pub organic_traffic: i64,
}

/// GET /api/dashboard/stats/:website_id
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<DashboardStats>, AppError> {
    let (keywords, backlinks) = tokio::try_join!(
        store::keywords::list_by_website(&state.db, website_id),
        store::backlinks::list_by_website(&state.db, website_id),
    )?;

    let avg_position = average_position(&keywords);

    Ok(Json(DashboardStats {
        total_keywords: keywords.len() as i64,
        avg_position,
        total_backlinks: backlinks.len() as i64,
        organic_traffic: ORGANIC_TRAFFIC_PLACEHOLDER,
    }))
}

/// Mean of current positions (absent positions count as 0, matching the
/// dashboard's historical behavior), rounded to one decimal.
fn average_position(keywords: &[KeywordRow]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let sum: i64 = keywords
        .iter()
        .map(|k| i64::from(k.current_position.unwrap_or(0)))
        .sum();
    let avg = sum as f64 / keywords.len() as f64;
    (avg * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn keyword(position: Option<i32>) -> KeywordRow {
        KeywordRow {
            id: 1,
            website_id: 1,
            keyword: "k".to_string(),
            target_url: None,
            current_position: position,
            previous_position: None,
            search_volume: None,
            difficulty: None,
            is_tracked: true,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn average_of_no_keywords_is_zero() {
        assert_eq!(average_position(&[]), 0.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let keywords = vec![keyword(Some(3)), keyword(Some(4)), keyword(Some(4))];
        // 11 / 3 = 3.666... → 3.7
        assert_eq!(average_position(&keywords), 3.7);
    }

    #[test]
    fn unranked_keywords_count_as_zero() {
        let keywords = vec![keyword(Some(10)), keyword(None)];
        assert_eq!(average_position(&keywords), 5.0);
    }
}

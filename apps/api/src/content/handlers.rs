use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::relay::{
    analyze_content, generate_content, optimize_content, DEFAULT_CONTENT_TYPE, DEFAULT_WORD_COUNT,
};
use crate::errors::{AppError, AppJson};
use crate::models::analysis::{ContentAnalysisRow, NewContentAnalysis};
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub website_id: i32,
    pub url: Option<String>,
    pub content: Option<String>,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub target_keywords: Vec<String>,
}

/// POST /api/content/analyze
///
/// When a URL is given the page is fetched and its extracted title,
/// description and visible text are analyzed; otherwise the inline content is
/// used. The result is persisted as an append-only snapshot.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<ContentAnalysisRow>, AppError> {
    if store::websites::get(&state.db, request.website_id)
        .await?
        .is_none()
    {
        return Err(AppError::Validation(format!(
            "Unknown websiteId {}",
            request.website_id
        )));
    }

    let (content, title, meta_description) = match &request.url {
        Some(url) => {
            let snapshot = state.fetcher.fetch(url).await?;
            (
                snapshot.content,
                Some(snapshot.title),
                Some(snapshot.meta_description),
            )
        }
        None => {
            let content = request
                .content
                .clone()
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| {
                    AppError::Validation("either url or content must be provided".to_string())
                })?;
            (content, request.title.clone(), request.meta_description.clone())
        }
    };

    let scores = analyze_content(&state.llm, &content, &request.target_keywords).await?;

    let row = store::content::create(
        &state.db,
        &NewContentAnalysis {
            website_id: request.website_id,
            url: request.url.clone().unwrap_or_default(),
            title,
            meta_description,
            content: Some(content),
            keyword_density: scores.keyword_density,
            readability_score: scores.readability_score,
            seo_score: scores.structure_score,
            suggestions: scores.suggestions,
        },
    )
    .await?;

    Ok(Json(row))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub target_keywords: Vec<String>,
    pub content_type: Option<String>,
    pub word_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

/// POST /api/content/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let content = generate_content(
        &state.llm,
        request.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
        &request.topic,
        &request.target_keywords,
        request.word_count.unwrap_or(DEFAULT_WORD_COUNT),
    )
    .await?;

    Ok(Json(GenerateResponse { content }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub content: String,
    #[serde(default)]
    pub target_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimized_content: String,
}

/// POST /api/content/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    AppJson(request): AppJson<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let optimized_content =
        optimize_content(&state.llm, &request.content, &request.target_keywords).await?;

    Ok(Json(OptimizeResponse { optimized_content }))
}

/// GET /api/content/:website_id
pub async fn handle_list(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Vec<ContentAnalysisRow>>, AppError> {
    let analyses = store::content::list_by_website(&state.db, website_id).await?;
    Ok(Json(analyses))
}

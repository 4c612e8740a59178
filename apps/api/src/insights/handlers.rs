use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::insights::prompts::{
    COMPETITOR_PROMPT_TEMPLATE, JSON_ONLY_SYSTEM, LOCAL_SEO_PROMPT_TEMPLATE,
    ONPAGE_PROMPT_TEMPLATE, SOCIAL_PROMPT_TEMPLATE,
};
use crate::models::analysis::{CompetitorAnalysisRow, LocalSeoRow, LocalSeoUpsert};
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// On-page analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPageRequest {
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub target_keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPageAnalysis {
    pub title_optimization: Vec<String>,
    pub meta_description_suggestions: Vec<String>,
    pub header_optimization: Vec<String>,
    pub internal_linking_suggestions: Vec<String>,
    pub keyword_placement: Vec<String>,
}

/// POST /api/onpage/analyze
pub async fn handle_onpage_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<OnPageRequest>,
) -> Result<Json<OnPageAnalysis>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let prompt = ONPAGE_PROMPT_TEMPLATE
        .replace("{url}", &request.url)
        .replace("{keywords}", &request.target_keywords.join(", "))
        .replace("{content}", &request.content);

    let analysis: OnPageAnalysis = state.llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
    Ok(Json(analysis))
}

// ────────────────────────────────────────────────────────────────────────────
// Competitor analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRequest {
    pub your_domain: String,
    pub competitor_domains: Vec<String>,
    pub niche: String,
    /// When present, each analysis is also persisted for this website.
    pub website_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsight {
    pub competitor: String,
    pub content_gaps: Vec<String>,
    pub keyword_opportunities: Vec<String>,
    pub strengths_weaknesses: StrengthsWeaknesses,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompetitorResponse {
    pub analyses: Vec<CompetitorInsight>,
}

/// POST /api/competitors/analyze
pub async fn handle_competitors_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<CompetitorRequest>,
) -> Result<Json<CompetitorResponse>, AppError> {
    if request.competitor_domains.is_empty() {
        return Err(AppError::Validation(
            "competitorDomains cannot be empty".to_string(),
        ));
    }

    let prompt = COMPETITOR_PROMPT_TEMPLATE
        .replace("{your_domain}", &request.your_domain)
        .replace("{competitors}", &request.competitor_domains.join(", "))
        .replace("{niche}", &request.niche);

    let response: CompetitorResponse = state.llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;

    if let Some(website_id) = request.website_id {
        if store::websites::get(&state.db, website_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Unknown websiteId {website_id}"
            )));
        }
        for insight in &response.analyses {
            store::competitors::create(
                &state.db,
                website_id,
                &insight.competitor,
                Some(insight.keyword_opportunities.len() as i32),
                &serde_json::json!(insight.content_gaps),
            )
            .await?;
        }
        info!(
            website_id,
            count = response.analyses.len(),
            "competitor analyses saved"
        );
    }

    Ok(Json(response))
}

/// GET /api/competitors/:website_id
pub async fn handle_competitors_list(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Vec<CompetitorAnalysisRow>>, AppError> {
    let analyses = store::competitors::list_by_website(&state.db, website_id).await?;
    Ok(Json(analyses))
}

// ────────────────────────────────────────────────────────────────────────────
// Local SEO
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoTasksRequest {
    pub business_name: String,
    pub location: String,
    pub business_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoTask {
    pub task: String,
    pub priority: TaskPriority,
    pub description: String,
    pub estimated_impact: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocalSeoTasksResponse {
    pub tasks: Vec<LocalSeoTask>,
}

/// POST /api/local-seo/generate-tasks
pub async fn handle_local_seo_tasks(
    State(state): State<AppState>,
    AppJson(request): AppJson<LocalSeoTasksRequest>,
) -> Result<Json<LocalSeoTasksResponse>, AppError> {
    if request.business_name.trim().is_empty() {
        return Err(AppError::Validation(
            "businessName cannot be empty".to_string(),
        ));
    }

    let prompt = LOCAL_SEO_PROMPT_TEMPLATE
        .replace("{business_name}", &request.business_name)
        .replace("{location}", &request.location)
        .replace("{business_type}", &request.business_type);

    let response: LocalSeoTasksResponse = state.llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
    Ok(Json(response))
}

/// GET /api/local-seo/:website_id. Returns `null` when no record exists yet.
pub async fn handle_local_seo_get(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
) -> Result<Json<Option<LocalSeoRow>>, AppError> {
    let data = store::local_seo::get(&state.db, website_id).await?;
    Ok(Json(data))
}

/// POST /api/local-seo/:website_id. Upserts the single record per website.
pub async fn handle_local_seo_upsert(
    State(state): State<AppState>,
    Path(website_id): Path<i32>,
    AppJson(request): AppJson<LocalSeoUpsert>,
) -> Result<Json<LocalSeoRow>, AppError> {
    if store::websites::get(&state.db, website_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Unknown websiteId {website_id}"
        )));
    }

    let row = store::local_seo::upsert(&state.db, website_id, &request).await?;
    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Social media
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPostsRequest {
    pub content: String,
    pub platforms: Vec<String>,
    #[serde(default)]
    pub target_keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: String,
    pub content: String,
    pub hashtags: Vec<String>,
    #[serde(rename = "optimizedForSEO")]
    pub optimized_for_seo: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SocialPostsResponse {
    pub posts: Vec<SocialPost>,
}

/// POST /api/social-media/generate-posts
pub async fn handle_social_posts(
    State(state): State<AppState>,
    AppJson(request): AppJson<SocialPostsRequest>,
) -> Result<Json<SocialPostsResponse>, AppError> {
    if request.platforms.is_empty() {
        return Err(AppError::Validation(
            "platforms cannot be empty".to_string(),
        ));
    }

    let prompt = SOCIAL_PROMPT_TEMPLATE
        .replace("{platforms}", &request.platforms.join(", "))
        .replace("{keywords}", &request.target_keywords.join(", "))
        .replace("{content}", &request.content);

    let response: SocialPostsResponse = state.llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onpage_analysis_fails_closed_on_missing_section() {
        let json = r#"{"titleOptimization": [], "keywordPlacement": []}"#;
        assert!(serde_json::from_str::<OnPageAnalysis>(json).is_err());
    }

    #[test]
    fn competitor_insight_decodes_nested_shape() {
        let json = r#"{
            "analyses": [{
                "competitor": "rival.com",
                "contentGaps": ["pricing page"],
                "keywordOpportunities": ["cheap widgets"],
                "strengthsWeaknesses": {"strengths": ["DA"], "weaknesses": ["slow site"]}
            }]
        }"#;
        let response: CompetitorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.analyses[0].competitor, "rival.com");
        assert_eq!(response.analyses[0].strengths_weaknesses.weaknesses.len(), 1);
    }

    #[test]
    fn task_priority_rejects_unknown_values() {
        assert!(serde_json::from_str::<TaskPriority>("\"urgent\"").is_err());
        assert_eq!(
            serde_json::from_str::<TaskPriority>("\"high\"").unwrap(),
            TaskPriority::High
        );
    }

    #[test]
    fn social_post_uses_original_casing_for_seo_flag() {
        let post = SocialPost {
            platform: "twitter".to_string(),
            content: "c".to_string(),
            hashtags: vec!["#seo".to_string()],
            optimized_for_seo: true,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["optimizedForSEO"], true);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysisRow {
    pub id: i32,
    pub website_id: i32,
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub content: Option<String>,
    pub keyword_density: Option<f64>,
    pub readability_score: Option<i32>,
    pub seo_score: Option<i32>,
    pub suggestions: Option<Value>,
    pub analyzed_at: DateTime<Utc>,
}

/// Insert payload for an append-only content analysis snapshot.
#[derive(Debug)]
pub struct NewContentAnalysis {
    pub website_id: i32,
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub content: Option<String>,
    pub keyword_density: f64,
    pub readability_score: i32,
    pub seo_score: i32,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAuditRow {
    pub id: i32,
    pub website_id: i32,
    pub page_speed: i32,
    pub mobile_score: i32,
    pub broken_links: i32,
    pub missing_alt_tags: i32,
    pub missing_meta_tags: i32,
    pub duplicate_content: i32,
    pub issues: Value,
    pub audited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoRow {
    pub id: i32,
    pub website_id: i32,
    pub business_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub gmb_score: Option<i32>,
    pub citations: Option<i32>,
    pub reviews: Option<i32>,
    pub average_rating: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoUpsert {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gmb_score: Option<i32>,
    #[serde(default)]
    pub citations: Option<i32>,
    #[serde(default)]
    pub reviews: Option<i32>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysisRow {
    pub id: i32,
    pub website_id: i32,
    pub competitor_domain: String,
    pub shared_keywords: Option<i32>,
    pub competitor_backlinks: Option<i32>,
    pub content_gaps: Option<Value>,
    pub analyzed_at: DateTime<Utc>,
}

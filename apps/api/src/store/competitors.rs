use serde_json::Value;
use sqlx::PgPool;

use crate::models::analysis::CompetitorAnalysisRow;

pub async fn list_by_website(
    pool: &PgPool,
    website_id: i32,
) -> Result<Vec<CompetitorAnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, CompetitorAnalysisRow>(
        "SELECT * FROM competitor_analyses WHERE website_id = $1 ORDER BY analyzed_at DESC",
    )
    .bind(website_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    website_id: i32,
    competitor_domain: &str,
    shared_keywords: Option<i32>,
    content_gaps: &Value,
) -> Result<CompetitorAnalysisRow, sqlx::Error> {
    sqlx::query_as::<_, CompetitorAnalysisRow>(
        r#"
        INSERT INTO competitor_analyses
            (website_id, competitor_domain, shared_keywords, content_gaps)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(website_id)
    .bind(competitor_domain)
    .bind(shared_keywords)
    .bind(content_gaps)
    .fetch_one(pool)
    .await
}

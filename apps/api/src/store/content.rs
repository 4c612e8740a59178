use sqlx::PgPool;

use crate::models::analysis::{ContentAnalysisRow, NewContentAnalysis};

pub async fn list_by_website(
    pool: &PgPool,
    website_id: i32,
) -> Result<Vec<ContentAnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, ContentAnalysisRow>(
        "SELECT * FROM content_analyses WHERE website_id = $1 ORDER BY analyzed_at DESC",
    )
    .bind(website_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    analysis: &NewContentAnalysis,
) -> Result<ContentAnalysisRow, sqlx::Error> {
    sqlx::query_as::<_, ContentAnalysisRow>(
        r#"
        INSERT INTO content_analyses
            (website_id, url, title, meta_description, content,
             keyword_density, readability_score, seo_score, suggestions)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(analysis.website_id)
    .bind(&analysis.url)
    .bind(&analysis.title)
    .bind(&analysis.meta_description)
    .bind(&analysis.content)
    .bind(analysis.keyword_density)
    .bind(analysis.readability_score)
    .bind(analysis.seo_score)
    .bind(serde_json::json!(analysis.suggestions))
    .fetch_one(pool)
    .await
}

use sqlx::PgPool;

use crate::audit::scorer::AuditOutcome;
use crate::models::analysis::TechnicalAuditRow;

pub async fn latest_by_website(
    pool: &PgPool,
    website_id: i32,
) -> Result<Option<TechnicalAuditRow>, sqlx::Error> {
    sqlx::query_as::<_, TechnicalAuditRow>(
        "SELECT * FROM technical_audits WHERE website_id = $1 ORDER BY audited_at DESC LIMIT 1",
    )
    .bind(website_id)
    .fetch_optional(pool)
    .await
}

/// Append-only: every audit run inserts a fresh row; "latest" is selected by
/// timestamp.
pub async fn create(
    pool: &PgPool,
    website_id: i32,
    outcome: &AuditOutcome,
) -> Result<TechnicalAuditRow, sqlx::Error> {
    sqlx::query_as::<_, TechnicalAuditRow>(
        r#"
        INSERT INTO technical_audits
            (website_id, page_speed, mobile_score, broken_links,
             missing_alt_tags, missing_meta_tags, duplicate_content, issues)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(website_id)
    .bind(outcome.page_speed)
    .bind(outcome.mobile_score)
    .bind(outcome.broken_links)
    .bind(outcome.missing_alt_tags)
    .bind(outcome.missing_meta_tags)
    .bind(outcome.duplicate_content)
    .bind(serde_json::json!(outcome.issues))
    .fetch_one(pool)
    .await
}

use sqlx::PgPool;

use crate::models::analysis::{LocalSeoRow, LocalSeoUpsert};

pub async fn get(pool: &PgPool, website_id: i32) -> Result<Option<LocalSeoRow>, sqlx::Error> {
    sqlx::query_as::<_, LocalSeoRow>("SELECT * FROM local_seo_data WHERE website_id = $1")
        .bind(website_id)
        .fetch_optional(pool)
        .await
}

/// One local-SEO record per website, upserted in place.
pub async fn upsert(
    pool: &PgPool,
    website_id: i32,
    data: &LocalSeoUpsert,
) -> Result<LocalSeoRow, sqlx::Error> {
    sqlx::query_as::<_, LocalSeoRow>(
        r#"
        INSERT INTO local_seo_data
            (website_id, business_name, address, phone, gmb_score,
             citations, reviews, average_rating)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (website_id) DO UPDATE SET
            business_name = EXCLUDED.business_name,
            address = EXCLUDED.address,
            phone = EXCLUDED.phone,
            gmb_score = EXCLUDED.gmb_score,
            citations = EXCLUDED.citations,
            reviews = EXCLUDED.reviews,
            average_rating = EXCLUDED.average_rating,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(website_id)
    .bind(&data.business_name)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(data.gmb_score)
    .bind(data.citations)
    .bind(data.reviews)
    .bind(data.average_rating)
    .fetch_one(pool)
    .await
}

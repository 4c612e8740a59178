use sqlx::PgPool;

use crate::models::site::{KeywordRow, NewKeyword};

pub async fn list_by_website(
    pool: &PgPool,
    website_id: i32,
) -> Result<Vec<KeywordRow>, sqlx::Error> {
    sqlx::query_as::<_, KeywordRow>(
        "SELECT * FROM keywords WHERE website_id = $1 ORDER BY updated_at DESC",
    )
    .bind(website_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, keyword: &NewKeyword) -> Result<KeywordRow, sqlx::Error> {
    sqlx::query_as::<_, KeywordRow>(
        r#"
        INSERT INTO keywords
            (website_id, keyword, target_url, current_position, search_volume, difficulty)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(keyword.website_id)
    .bind(&keyword.keyword)
    .bind(&keyword.target_url)
    .bind(keyword.current_position)
    .bind(keyword.search_volume)
    .bind(keyword.difficulty)
    .fetch_one(pool)
    .await
}

/// Records a new SERP position, rotating the old current position into
/// `previous_position` in a single statement. Only one step of history is
/// kept. Returns `None` when the keyword does not exist.
pub async fn update_position(
    pool: &PgPool,
    id: i32,
    position: i32,
) -> Result<Option<KeywordRow>, sqlx::Error> {
    sqlx::query_as::<_, KeywordRow>(
        r#"
        UPDATE keywords
        SET previous_position = current_position,
            current_position = $2,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(position)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::site::NewWebsite;
    use crate::store::websites;

    async fn seed_keyword(pool: &PgPool, position: Option<i32>) -> KeywordRow {
        let website = websites::create(
            pool,
            &NewWebsite {
                user_id: 1,
                domain: "ex.com".to_string(),
                name: "Ex".to_string(),
            },
        )
        .await
        .unwrap();

        create(
            pool,
            &NewKeyword {
                website_id: website.id,
                keyword: "widgets".to_string(),
                target_url: None,
                current_position: position,
                search_volume: None,
                difficulty: None,
            },
        )
        .await
        .unwrap()
    }

    #[sqlx::test]
    async fn update_position_rotates_current_into_previous(pool: PgPool) {
        let keyword = seed_keyword(&pool, Some(8)).await;

        let updated = update_position(&pool, keyword.id, 5)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.current_position, Some(5));
        assert_eq!(updated.previous_position, Some(8));
    }

    #[sqlx::test]
    async fn update_position_keeps_one_step_of_history(pool: PgPool) {
        let keyword = seed_keyword(&pool, Some(8)).await;

        update_position(&pool, keyword.id, 5).await.unwrap();
        let updated = update_position(&pool, keyword.id, 3)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.current_position, Some(3));
        assert_eq!(updated.previous_position, Some(5));
    }

    #[sqlx::test]
    async fn update_position_on_unknown_keyword_returns_none(pool: PgPool) {
        let updated = update_position(&pool, 9999, 3).await.unwrap();
        assert!(updated.is_none());
    }
}

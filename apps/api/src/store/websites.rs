use sqlx::PgPool;

use crate::models::site::{NewWebsite, WebsiteRow};

pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<WebsiteRow>, sqlx::Error> {
    sqlx::query_as::<_, WebsiteRow>(
        "SELECT * FROM websites WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Option<WebsiteRow>, sqlx::Error> {
    sqlx::query_as::<_, WebsiteRow>("SELECT * FROM websites WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, website: &NewWebsite) -> Result<WebsiteRow, sqlx::Error> {
    sqlx::query_as::<_, WebsiteRow>(
        "INSERT INTO websites (user_id, domain, name) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(website.user_id)
    .bind(&website.domain)
    .bind(&website.name)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn created_website_appears_in_user_listing(pool: PgPool) {
        let website = create(
            &pool,
            &NewWebsite {
                user_id: 1,
                domain: "ex.com".to_string(),
                name: "Ex".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(website.domain, "ex.com");
        assert!(website.is_active);

        let listed = list_by_user(&pool, 1).await.unwrap();
        assert!(listed.iter().any(|w| w.id == website.id));

        // other users never see it
        assert!(list_by_user(&pool, 2).await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn get_on_unknown_id_is_none(pool: PgPool) {
        assert!(get(&pool, 424242).await.unwrap().is_none());
    }
}

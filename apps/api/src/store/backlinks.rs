use sqlx::PgPool;

use crate::models::site::{BacklinkRow, BacklinkStatus, NewBacklink};

pub async fn list_by_website(
    pool: &PgPool,
    website_id: i32,
) -> Result<Vec<BacklinkRow>, sqlx::Error> {
    sqlx::query_as::<_, BacklinkRow>(
        "SELECT * FROM backlinks WHERE website_id = $1 ORDER BY found_at DESC",
    )
    .bind(website_id)
    .fetch_all(pool)
    .await
}

pub async fn list_pending(
    pool: &PgPool,
    website_id: i32,
) -> Result<Vec<BacklinkRow>, sqlx::Error> {
    sqlx::query_as::<_, BacklinkRow>(
        "SELECT * FROM backlinks WHERE website_id = $1 AND status = 'pending' ORDER BY found_at DESC",
    )
    .bind(website_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, backlink: &NewBacklink) -> Result<BacklinkRow, sqlx::Error> {
    sqlx::query_as::<_, BacklinkRow>(
        r#"
        INSERT INTO backlinks
            (website_id, source_url, target_url, anchor_text, domain_authority, status, is_nofollow)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(backlink.website_id)
    .bind(&backlink.source_url)
    .bind(&backlink.target_url)
    .bind(&backlink.anchor_text)
    .bind(backlink.domain_authority)
    .bind(backlink.status.as_str())
    .bind(backlink.is_nofollow)
    .fetch_one(pool)
    .await
}

/// Sets the review status; approval also stamps `approved_at`.
/// Returns the number of affected rows (0 = unknown id).
pub async fn update_status(
    pool: &PgPool,
    id: i32,
    status: BacklinkStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE backlinks
        SET status = $2,
            approved_at = CASE WHEN $2 = 'approved' THEN NOW() ELSE approved_at END
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::site::NewWebsite;
    use crate::store::websites;

    async fn seed_backlink(pool: &PgPool) -> BacklinkRow {
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
            &NewBacklink {
                website_id: website.id,
                source_url: "https://blog.org".to_string(),
                target_url: "https://ex.com".to_string(),
                anchor_text: None,
                domain_authority: Some(60),
                status: BacklinkStatus::Pending,
                is_nofollow: false,
            },
        )
        .await
        .unwrap()
    }

    #[sqlx::test]
    async fn approval_stamps_approved_at(pool: PgPool) {
        let backlink = seed_backlink(&pool).await;
        assert!(backlink.approved_at.is_none());

        let affected = update_status(&pool, backlink.id, BacklinkStatus::Approved)
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let rows = list_by_website(&pool, backlink.website_id).await.unwrap();
        assert_eq!(rows[0].status, "approved");
        assert!(rows[0].approved_at.is_some());
    }

    #[sqlx::test]
    async fn rejection_leaves_approved_at_unset(pool: PgPool) {
        let backlink = seed_backlink(&pool).await;

        update_status(&pool, backlink.id, BacklinkStatus::Rejected)
            .await
            .unwrap();

        let rows = list_by_website(&pool, backlink.website_id).await.unwrap();
        assert_eq!(rows[0].status, "rejected");
        assert!(rows[0].approved_at.is_none());
    }

    // Unknown statuses are rejected at the handler boundary before any query
    // runs; the store only ever sees the three enum variants. This covers the
    // other half: an unknown id mutates nothing.
    #[sqlx::test]
    async fn unknown_id_touches_no_rows(pool: PgPool) {
        let backlink = seed_backlink(&pool).await;

        let affected = update_status(&pool, backlink.id + 1, BacklinkStatus::Approved)
            .await
            .unwrap();
        assert_eq!(affected, 0);

        let rows = list_by_website(&pool, backlink.website_id).await.unwrap();
        assert_eq!(rows[0].status, "pending");
        assert!(rows[0].approved_at.is_none());
    }

    #[sqlx::test]
    async fn pending_listing_excludes_reviewed_rows(pool: PgPool) {
        let backlink = seed_backlink(&pool).await;
        assert_eq!(
            list_pending(&pool, backlink.website_id).await.unwrap().len(),
            1
        );

        update_status(&pool, backlink.id, BacklinkStatus::Approved)
            .await
            .unwrap();

        assert!(list_pending(&pool, backlink.website_id)
            .await
            .unwrap()
            .is_empty());
    }
}

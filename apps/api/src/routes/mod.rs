pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::{audit, backlinks, content, insights, sites, tracking};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard
        .route(
            "/api/dashboard/stats/:website_id",
            get(sites::handlers::handle_dashboard_stats),
        )
        // Websites
        .route(
            "/api/websites",
            get(sites::handlers::handle_list_websites)
                .post(sites::handlers::handle_create_website),
        )
        // Keywords
        .route(
            "/api/keywords/:website_id",
            get(sites::handlers::handle_list_keywords),
        )
        .route("/api/keywords", post(sites::handlers::handle_create_keyword))
        // Backlinks
        .route(
            "/api/backlinks/discover",
            post(backlinks::handlers::handle_discover),
        )
        // :id is the website id for list/pending/discover and the backlink id
        // for status; the router requires one param name per position.
        .route(
            "/api/backlinks/:id",
            get(backlinks::handlers::handle_list),
        )
        .route(
            "/api/backlinks/:id/pending",
            get(backlinks::handlers::handle_pending),
        )
        .route(
            "/api/backlinks/:id/discover",
            post(backlinks::handlers::handle_discover_and_save),
        )
        .route(
            "/api/backlinks/:id/status",
            patch(backlinks::handlers::handle_update_status),
        )
        // Content
        .route("/api/content/analyze", post(content::handlers::handle_analyze))
        .route(
            "/api/content/generate",
            post(content::handlers::handle_generate),
        )
        .route(
            "/api/content/optimize",
            post(content::handlers::handle_optimize),
        )
        .route("/api/content/:website_id", get(content::handlers::handle_list))
        // Technical audit
        .route(
            "/api/audit/:website_id",
            post(audit::handlers::handle_run_audit),
        )
        .route(
            "/api/audit/:website_id/latest",
            get(audit::handlers::handle_latest_audit),
        )
        // On-page SEO
        .route(
            "/api/onpage/analyze",
            post(insights::handlers::handle_onpage_analyze),
        )
        // Competitors
        .route(
            "/api/competitors/analyze",
            post(insights::handlers::handle_competitors_analyze),
        )
        .route(
            "/api/competitors/:website_id",
            get(insights::handlers::handle_competitors_list),
        )
        // Local SEO
        .route(
            "/api/local-seo/generate-tasks",
            post(insights::handlers::handle_local_seo_tasks),
        )
        .route(
            "/api/local-seo/:website_id",
            get(insights::handlers::handle_local_seo_get)
                .post(insights::handlers::handle_local_seo_upsert),
        )
        // Social media
        .route(
            "/api/social-media/generate-posts",
            post(insights::handlers::handle_social_posts),
        )
        // Rank tracking
        .route(
            "/api/rank-tracking/update",
            post(tracking::handlers::handle_update),
        )
        .route(
            "/api/rank-tracking/:website_id",
            get(tracking::handlers::handle_tracking),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::audit::fetcher::PageFetcher;
    use crate::config::Config;
    use crate::llm::LlmClient;
    use crate::tracking::rank_source::UnconfiguredRankSource;

    // Lazy pool: never connects, which is fine for requests rejected before
    // any query runs.
    fn test_state() -> AppState {
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://localhost/unused")
                .unwrap(),
            llm: LlmClient::new("test-key".to_string()),
            fetcher: PageFetcher::new(),
            rank_source: Arc::new(UnconfiguredRankSource),
            config: Config {
                database_url: "postgres://localhost/unused".to_string(),
                anthropic_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn spawn_app() -> String {
        let app = build_router(test_state());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn malformed_create_payload_is_a_400_with_message_body() {
        let base = spawn_app().await;
        let client = reqwest::Client::new();

        // wrong field type
        let response = client
            .post(format!("{base}/api/websites"))
            .header("content-type", "application/json")
            .body(r#"{"userId": 1, "domain": 42, "name": "Ex"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["message"].is_string());

        // invalid JSON syntax
        let response = client
            .post(format!("{base}/api/keywords"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn routes_register_without_conflicts() {
        // Router construction panics on conflicting paths; building it is the
        // assertion.
        let _ = build_router(test_state());
    }
}

use std::sync::Arc;

use sqlx::PgPool;

use crate::audit::fetcher::PageFetcher;
use crate::config::Config;
use crate::llm::LlmClient;
use crate::tracking::rank_source::RankSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Constructed once in `main`; no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub fetcher: PageFetcher,
    /// Pluggable SERP position source. Default: `UnconfiguredRankSource`,
    /// which reports positions unchanged until a real provider is wired in.
    pub rank_source: Arc<dyn RankSource>,
    pub config: Config,
}

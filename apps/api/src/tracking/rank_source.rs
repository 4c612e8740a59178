//! Pluggable SERP position source.
//!
//! `AppState` holds an `Arc<dyn RankSource>` so a real SERP API backend can be
//! swapped in without touching the endpoint or handler code. The default
//! backend is deliberately inert: it reports no position, so rank updates
//! leave stored positions unchanged instead of fabricating data.

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait RankSource: Send + Sync {
    /// Looks up the current SERP position of `keyword` for `domain`.
    /// `None` means the source cannot resolve a position.
    async fn check_position(&self, domain: &str, keyword: &str)
        -> Result<Option<i32>, AppError>;
}

/// Placeholder backend used until a SERP API is configured.
pub struct UnconfiguredRankSource;

#[async_trait]
impl RankSource for UnconfiguredRankSource {
    async fn check_position(
        &self,
        _domain: &str,
        _keyword: &str,
    ) -> Result<Option<i32>, AppError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_source_reports_no_position() {
        let source = UnconfiguredRankSource;
        let position = source.check_position("ex.com", "widgets").await.unwrap();
        assert_eq!(position, None);
    }
}

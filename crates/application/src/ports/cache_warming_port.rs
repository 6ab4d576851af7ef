use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WarmingStats {
    pub attempted: usize,
    pub warmed: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

#[async_trait]
pub trait CacheWarmingPort: Send + Sync {
    /// Resolves the configured warm list sequentially so upstream connections
    /// and provider metrics stay fresh. Answers are not stored.
    async fn warm(&self) -> WarmingStats;
}

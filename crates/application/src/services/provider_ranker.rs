use crate::ports::MetricsStore;
use ferrous_doh_domain::{MetricsSnapshot, Provider, RankedProvider};
use std::sync::Arc;
use tracing::debug;

/// Orders the configured providers best-first from the latest metrics.
pub struct ProviderRanker {
    providers: Arc<[Provider]>,
    metrics: Arc<dyn MetricsStore>,
}

impl ProviderRanker {
    pub fn new(providers: Vec<Provider>, metrics: Arc<dyn MetricsStore>) -> Self {
        Self {
            providers: providers.into(),
            metrics,
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn metrics(&self) -> &Arc<dyn MetricsStore> {
        &self.metrics
    }

    /// Reads one metrics snapshot and ranks against it. Callers reuse the
    /// returned order for every attempt of a resolution.
    pub async fn rank(&self) -> Vec<RankedProvider> {
        let snapshot = self.metrics.read().await;
        let ranked = self.rank_with(&snapshot);
        debug!(
            best = ranked.first().map(|p| p.name()).unwrap_or("-"),
            providers = ranked.len(),
            "Providers ranked"
        );
        ranked
    }

    /// Descending score; equal scores keep configuration order.
    pub fn rank_with(&self, snapshot: &MetricsSnapshot) -> Vec<RankedProvider> {
        let mut ranked: Vec<RankedProvider> = self
            .providers
            .iter()
            .map(|p| RankedProvider::score(p, snapshot.get(p.name.as_ref())))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

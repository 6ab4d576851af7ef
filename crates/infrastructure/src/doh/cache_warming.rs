use super::load_balancer::ResolutionStrategy;
use async_trait::async_trait;
use ferrous_doh_application::ports::{CacheWarmingPort, WarmingStats};
use ferrous_doh_application::services::ProviderRanker;
use ferrous_doh_domain::dns_wire::{encode_b64url, MessageBuilder, TransactionIdSource};
use ferrous_doh_domain::RecordType;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Periodically resolves well-known gaming domains so upstream connections
/// and provider metrics are fresh before players need them.
///
/// Answers are discarded: every query carries a fresh transaction id, so an
/// entry keyed on these bytes would never be hit by a client.
pub struct CacheWarmer {
    ranker: Arc<ProviderRanker>,
    strategy: Arc<dyn ResolutionStrategy>,
    ids: Arc<dyn TransactionIdSource>,
    domains: Vec<String>,
}

impl CacheWarmer {
    pub fn new(
        ranker: Arc<ProviderRanker>,
        strategy: Arc<dyn ResolutionStrategy>,
        ids: Arc<dyn TransactionIdSource>,
        domains: Vec<String>,
    ) -> Self {
        Self {
            ranker,
            strategy,
            ids,
            domains,
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

#[async_trait]
impl CacheWarmingPort for CacheWarmer {
    async fn warm(&self) -> WarmingStats {
        info!(domains = self.domains.len(), "Starting cache warming");
        let start = Instant::now();
        let mut stats = WarmingStats::default();

        for domain in &self.domains {
            stats.attempted += 1;
            let query = MessageBuilder::build_query(domain, RecordType::A, self.ids.as_ref());
            let dns_b64: Arc<str> = encode_b64url(&query).into();
            let ranked = self.ranker.rank().await;

            match self.strategy.resolve(&ranked, &dns_b64).await {
                Some(outcome) => {
                    stats.warmed += 1;
                    debug!(domain = %domain, provider = %outcome.provider, rtt_ms = outcome.rtt_ms, "Warmed");
                }
                None => {
                    stats.failed += 1;
                    warn!(domain = %domain, "Warm-up resolution failed");
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            warmed = stats.warmed,
            failed = stats.failed,
            duration_ms = stats.duration_ms,
            "Cache warming complete"
        );
        stats
    }
}

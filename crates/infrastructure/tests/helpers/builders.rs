use super::mock_transport::MockTransport;
use ferrous_doh_application::ports::MetricsStore;
use ferrous_doh_domain::config::UpstreamConfig;
use ferrous_doh_domain::{Provider, RankedProvider};
use ferrous_doh_infrastructure::doh::{KvMetricsStore, MemoryKvStore, UpstreamInvoker};
use std::sync::Arc;

pub const ALPHA: &str = "https://alpha.test/dns-query";
pub const BRAVO: &str = "https://bravo.test/dns-query";
pub const CHARLIE: &str = "https://charlie.test/dns-query";
pub const DELTA: &str = "https://delta.test/dns-query";

pub const METRICS_KEY: &str = "metrics_v1";

/// Four providers with descending weights, so with no metrics the ranking
/// is alpha, bravo, charlie, delta.
pub fn providers() -> Vec<Provider> {
    vec![
        Provider::new("alpha", ALPHA, 30),
        Provider::new("bravo", BRAVO, 20),
        Provider::new("charlie", CHARLIE, 10),
        Provider::new("delta", DELTA, 0),
    ]
}

pub fn ranked(providers: &[Provider]) -> Vec<RankedProvider> {
    providers
        .iter()
        .map(|p| RankedProvider::score(p, None))
        .collect()
}

pub fn upstream_config() -> UpstreamConfig {
    UpstreamConfig {
        providers: providers(),
        racing_providers: 3,
        timeout_ms: 1200,
        short_timeout_ms: 800,
    }
}

pub fn memory_metrics() -> Arc<KvMetricsStore> {
    Arc::new(KvMetricsStore::new(Arc::new(MemoryKvStore::new()), METRICS_KEY))
}

pub fn invoker(
    transport: Arc<MockTransport>,
    metrics: Arc<dyn MetricsStore>,
) -> Arc<UpstreamInvoker> {
    Arc::new(UpstreamInvoker::new(transport, metrics, &upstream_config()))
}

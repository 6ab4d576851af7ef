use super::load_balancer::UpstreamInvoker;
use async_trait::async_trait;
use ferrous_doh_application::ports::{ProbeResult, UpstreamHealthPort};
use ferrous_doh_domain::dns_wire::{encode_b64url, MessageBuilder, TransactionIdSource};
use ferrous_doh_domain::{Provider, RecordType};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

const HEALTH_PROBE_NAME: &str = "example.com";
const BENCH_PROBE_NAME: &str = "cloudflare.com";

/// Sends one benign query to every configured provider, in configuration
/// order, with the racing deadline. Probes go through the regular invoker so
/// each one also feeds the metrics.
pub struct UpstreamProber {
    invoker: Arc<UpstreamInvoker>,
    providers: Arc<[Provider]>,
    ids: Arc<dyn TransactionIdSource>,
}

impl UpstreamProber {
    pub fn new(
        invoker: Arc<UpstreamInvoker>,
        providers: impl Into<Arc<[Provider]>>,
        ids: Arc<dyn TransactionIdSource>,
    ) -> Self {
        Self {
            invoker,
            providers: providers.into(),
            ids,
        }
    }

    async fn probe_all(&self, name: &str) -> Vec<ProbeResult> {
        let query = MessageBuilder::build_query(name, RecordType::A, self.ids.as_ref());
        let dns_b64 = encode_b64url(&query);

        let mut results = Vec::with_capacity(self.providers.len());
        for provider in self.providers.iter() {
            let start = Instant::now();
            let outcome = self.invoker.invoke(provider, &dns_b64, true).await;
            let result = ProbeResult {
                provider: provider.name.to_string(),
                status: outcome.status,
                rtt: start.elapsed().as_millis() as u64,
            };
            debug!(provider = %result.provider, status = result.status, rtt_ms = result.rtt, "Probe finished");
            results.push(result);
        }
        results
    }
}

#[async_trait]
impl UpstreamHealthPort for UpstreamProber {
    async fn run_health_check(&self) -> Vec<ProbeResult> {
        let results = self.probe_all(HEALTH_PROBE_NAME).await;
        let healthy = results.iter().filter(|r| r.is_healthy()).count();
        info!(healthy, total = results.len(), "Upstream health check complete");
        results
    }

    async fn bench(&self) -> Vec<ProbeResult> {
        self.probe_all(BENCH_PROBE_NAME).await
    }
}

use super::invoker::UpstreamInvoker;
use super::strategy::ResolutionStrategy;
use async_trait::async_trait;
use ferrous_doh_domain::{RankedProvider, ResolutionOutcome};
use std::sync::Arc;
use tracing::{debug, warn};

/// Walks the whole ranking one provider at a time with the long deadline.
pub struct FailoverStrategy {
    invoker: Arc<UpstreamInvoker>,
}

impl FailoverStrategy {
    pub fn new(invoker: Arc<UpstreamInvoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl ResolutionStrategy for FailoverStrategy {
    async fn resolve(
        &self,
        ranked: &[RankedProvider],
        dns_b64: &Arc<str>,
    ) -> Option<ResolutionOutcome> {
        debug!(strategy = "failover", providers = ranked.len(), "Trying sequentially");

        for (index, candidate) in ranked.iter().enumerate() {
            let outcome = self
                .invoker
                .invoke(&candidate.provider, dns_b64, false)
                .await;
            if outcome.is_success() {
                debug!(provider = %outcome.provider, rtt_ms = outcome.rtt_ms, position = index, "Provider responded");
                return Some(outcome);
            }
            warn!(
                provider = %candidate.name(),
                status = outcome.status,
                position = index,
                "Failing over"
            );
        }
        None
    }

    fn name(&self) -> &'static str {
        "failover"
    }
}

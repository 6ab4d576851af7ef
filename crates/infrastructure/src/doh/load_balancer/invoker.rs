use crate::doh::transport::DohTransport;
use ferrous_doh_application::ports::MetricsStore;
use ferrous_doh_domain::config::UpstreamConfig;
use ferrous_doh_domain::{Provider, ResolutionOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Issues a single DoH GET against one provider and records exactly one
/// metrics observation for it.
pub struct UpstreamInvoker {
    transport: Arc<dyn DohTransport>,
    metrics: Arc<dyn MetricsStore>,
    timeout: Duration,
    short_timeout: Duration,
    failure_penalty_ms: u64,
}

impl UpstreamInvoker {
    pub fn new(
        transport: Arc<dyn DohTransport>,
        metrics: Arc<dyn MetricsStore>,
        config: &UpstreamConfig,
    ) -> Self {
        Self {
            transport,
            metrics,
            timeout: Duration::from_millis(config.timeout_ms),
            short_timeout: Duration::from_millis(config.effective_short_timeout_ms()),
            failure_penalty_ms: config.failure_penalty_ms(),
        }
    }

    /// Never fails: transport errors and deadline expiry come back as a
    /// [`ResolutionOutcome`] with status 599 and an empty body.
    pub async fn invoke(&self, provider: &Provider, dns_b64: &str, short: bool) -> ResolutionOutcome {
        let deadline = if short { self.short_timeout } else { self.timeout };
        let start = Instant::now();

        match self.transport.get(&provider.url, dns_b64, deadline).await {
            Ok(reply) => {
                let rtt_ms = start.elapsed().as_millis() as u64;
                let success = reply.is_success();
                self.metrics.observe(&provider.name, rtt_ms, success).await;
                debug!(
                    provider = %provider.name,
                    status = reply.status,
                    rtt_ms,
                    short,
                    "Upstream replied"
                );
                ResolutionOutcome {
                    provider: Arc::clone(&provider.name),
                    status: reply.status,
                    body: reply.body,
                    rtt_ms,
                }
            }
            Err(e) => {
                debug!(provider = %provider.name, error = %e, short, "Upstream attempt failed");
                self.metrics
                    .observe(&provider.name, self.failure_penalty_ms, false)
                    .await;
                ResolutionOutcome::transport_failure(
                    Arc::clone(&provider.name),
                    self.failure_penalty_ms,
                )
            }
        }
    }
}

use super::invoker::UpstreamInvoker;
use super::strategy::ResolutionStrategy;
use async_trait::async_trait;
use ferrous_doh_domain::{RankedProvider, ResolutionOutcome};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Races the top `width` providers with the short deadline.
///
/// The first invocation to complete decides the race. When that outcome is
/// not a success the same providers are retried one by one with the long
/// deadline. Racers still in flight once the race is decided keep running
/// detached until their own deadline so every invocation is observed.
pub struct RaceStrategy {
    invoker: Arc<UpstreamInvoker>,
    width: usize,
}

impl RaceStrategy {
    pub fn new(invoker: Arc<UpstreamInvoker>, width: usize) -> Self {
        Self {
            invoker,
            width: width.max(1),
        }
    }

    async fn first_completion(
        &self,
        contenders: &[RankedProvider],
        dns_b64: &Arc<str>,
    ) -> Option<ResolutionOutcome> {
        let mut futs = FuturesUnordered::new();

        for candidate in contenders {
            let invoker = Arc::clone(&self.invoker);
            let provider = candidate.provider.clone();
            let dns_b64 = Arc::clone(dns_b64);
            futs.push(tokio::spawn(async move {
                invoker.invoke(&provider, &dns_b64, true).await
            }));
        }

        // Dropping the remaining join handles detaches the losers.
        while let Some(join_result) = futs.next().await {
            match join_result {
                Ok(outcome) => return Some(outcome),
                Err(e) => warn!(error = %e, "Racer task failed"),
            }
        }
        None
    }
}

#[async_trait]
impl ResolutionStrategy for RaceStrategy {
    async fn resolve(
        &self,
        ranked: &[RankedProvider],
        dns_b64: &Arc<str>,
    ) -> Option<ResolutionOutcome> {
        let contenders = &ranked[..ranked.len().min(self.width)];
        if contenders.is_empty() {
            return None;
        }
        debug!(strategy = "race", providers = contenders.len(), "Racing top providers");

        match self.first_completion(contenders, dns_b64).await {
            Some(outcome) if outcome.is_success() => {
                debug!(provider = %outcome.provider, rtt_ms = outcome.rtt_ms, "Fastest response");
                return Some(outcome);
            }
            Some(outcome) => {
                debug!(provider = %outcome.provider, status = outcome.status, "Race settled on a failure, retrying sequentially");
            }
            None => debug!("No racer completed, retrying sequentially"),
        }

        for candidate in contenders {
            let outcome = self
                .invoker
                .invoke(&candidate.provider, dns_b64, false)
                .await;
            if outcome.is_success() {
                return Some(outcome);
            }
            warn!(provider = %candidate.name(), status = outcome.status, "Failing over");
        }
        None
    }

    fn name(&self) -> &'static str {
        "race"
    }
}

use async_trait::async_trait;
use ferrous_doh_domain::{RankedProvider, ResolutionOutcome};
use std::sync::Arc;

/// Orchestrates upstream invocations across an already ranked provider list.
///
/// `None` means every attempted provider failed; non-success outcomes are
/// never returned.
#[async_trait]
pub trait ResolutionStrategy: Send + Sync {
    async fn resolve(
        &self,
        ranked: &[RankedProvider],
        dns_b64: &Arc<str>,
    ) -> Option<ResolutionOutcome>;

    fn name(&self) -> &'static str;
}

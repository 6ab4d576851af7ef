use async_trait::async_trait;
use ferrous_doh_domain::{DohRequest, DohResponse, DomainError, MetricsSnapshot, RankedProvider};

#[async_trait]
pub trait DohResolver: Send + Sync {
    /// Answers a DoH query from cache or upstream.
    ///
    /// The only error surfaced for a well-formed request is
    /// [`DomainError::UpstreamExhausted`].
    async fn resolve(&self, request: &DohRequest) -> Result<DohResponse, DomainError>;

    /// Providers in the order the next resolution would try them.
    async fn ranked_providers(&self) -> Vec<RankedProvider>;

    async fn metrics_snapshot(&self) -> MetricsSnapshot;
}

use async_trait::async_trait;
use serde::Serialize;

/// One probe of one provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub provider: String,
    pub status: u16,
    pub rtt: u64,
}

impl ProbeResult {
    pub fn is_healthy(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait UpstreamHealthPort: Send + Sync {
    /// Probes every configured provider once with a benign query so their
    /// metrics stay fresh even without traffic.
    async fn run_health_check(&self) -> Vec<ProbeResult>;

    /// Probes every configured provider once, in configuration order, and
    /// reports the wall-clock time of each probe.
    async fn bench(&self) -> Vec<ProbeResult>;
}

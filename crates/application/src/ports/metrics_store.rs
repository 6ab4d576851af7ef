use async_trait::async_trait;
use ferrous_doh_domain::MetricsSnapshot;

/// Per-provider latency and reliability counters.
///
/// Both operations are infallible from the caller's point of view: storage
/// problems degrade to "no metrics known" on read and to a dropped update on
/// write. Updates are read-modify-write without cross-request locking, so a
/// concurrent observation may be lost.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn read(&self) -> MetricsSnapshot;

    async fn observe(&self, provider: &str, rtt_ms: u64, success: bool);
}

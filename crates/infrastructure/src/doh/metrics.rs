use async_trait::async_trait;
use ferrous_doh_application::ports::{KeyValueStore, MetricsStore};
use ferrous_doh_domain::{MetricsSnapshot, ProviderMetric};
use std::sync::Arc;
use tracing::{debug, warn};

/// Provider metrics kept as one JSON snapshot under a single key.
///
/// Without a backing store every read is empty and every observation is
/// dropped, so ranking falls back to static weights.
pub struct KvMetricsStore {
    kv: Option<Arc<dyn KeyValueStore>>,
    key: String,
}

impl KvMetricsStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv: Some(kv),
            key: key.into(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            kv: None,
            key: String::new(),
        }
    }
}

#[async_trait]
impl MetricsStore for KvMetricsStore {
    async fn read(&self) -> MetricsSnapshot {
        let Some(kv) = &self.kv else {
            return MetricsSnapshot::new();
        };

        match kv.get(&self.key).await {
            Ok(Some(raw)) => serde_json::from_slice(&raw).unwrap_or_else(|e| {
                warn!(key = %self.key, error = %e, "Discarding undecodable metrics snapshot");
                MetricsSnapshot::new()
            }),
            Ok(None) => MetricsSnapshot::new(),
            Err(e) => {
                debug!(key = %self.key, error = %e, "Metrics read failed");
                MetricsSnapshot::new()
            }
        }
    }

    async fn observe(&self, provider: &str, rtt_ms: u64, success: bool) {
        let Some(kv) = &self.kv else {
            return;
        };

        let mut snapshot = self.read().await;
        let metric = snapshot
            .entry(provider.to_string())
            .or_insert_with(|| ProviderMetric::seeded(rtt_ms));
        metric.record(rtt_ms, success);
        debug!(
            provider = %provider,
            rtt_ms,
            success,
            smoothed_rtt_ms = metric.rtt_ms,
            attempts = metric.attempts,
            "Provider observed"
        );

        let encoded = match serde_json::to_vec(&snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to encode metrics snapshot");
                return;
            }
        };
        if let Err(e) = kv.put(&self.key, encoded).await {
            debug!(key = %self.key, error = %e, "Metrics write failed");
        }
    }
}

use ferrous_doh_application::ports::UpstreamHealthPort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Probes every provider on a fixed interval so ranking keeps moving even
/// when traffic is light.
pub struct HealthCheckJob {
    health: Arc<dyn UpstreamHealthPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HealthCheckJob {
    pub fn new(health: Arc<dyn UpstreamHealthPort>) -> Self {
        Self {
            health,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting upstream health check job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HealthCheckJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let results = self.health.run_health_check().await;
                        let unhealthy: Vec<&str> = results
                            .iter()
                            .filter(|r| !r.is_healthy())
                            .map(|r| r.provider.as_str())
                            .collect();
                        if !unhealthy.is_empty() {
                            warn!(providers = ?unhealthy, "Unhealthy upstream providers");
                        }
                    }
                }
            }
        });
    }
}

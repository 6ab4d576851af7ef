use ferrous_doh_application::ports::CacheWarmingPort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_INTERVAL_SECS: u64 = 900;

pub struct CacheWarmJob {
    warmer: Arc<dyn CacheWarmingPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheWarmJob {
    pub fn new(warmer: Arc<dyn CacheWarmingPort>) -> Self {
        Self {
            warmer,
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
        info!(interval_secs = self.interval_secs, "Starting cache warm job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheWarmJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.warmer.warm().await;
                    }
                }
            }
        });
    }
}

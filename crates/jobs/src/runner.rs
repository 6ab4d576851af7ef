use crate::{CacheWarmJob, HealthCheckJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(HealthCheckJob);
impl_spawnable_job!(CacheWarmJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

/// Starts the periodic upstream maintenance: health probes and warm-up
/// resolutions, each on its own interval.
pub struct JobRunner {
    health_check: Option<HealthCheckJob>,
    cache_warm: Option<CacheWarmJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            health_check: None,
            cache_warm: None,
            shutdown: None,
        }
    }

    pub fn with_health_check(mut self, job: HealthCheckJob) -> Self {
        self.health_check = Some(job);
        self
    }

    pub fn with_cache_warm(mut self, job: CacheWarmJob) -> Self {
        self.cache_warm = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.health_check, &self.shutdown);
        spawn_job(self.cache_warm, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

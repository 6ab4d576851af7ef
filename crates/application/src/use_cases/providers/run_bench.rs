use crate::ports::{ProbeResult, UpstreamHealthPort};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub results: Vec<ProbeResult>,
    pub t: i64,
}

pub struct RunBenchUseCase {
    health: Arc<dyn UpstreamHealthPort>,
}

impl RunBenchUseCase {
    pub fn new(health: Arc<dyn UpstreamHealthPort>) -> Self {
        Self { health }
    }

    pub async fn execute(&self) -> BenchReport {
        let results = self.health.bench().await;
        info!(
            providers = results.len(),
            healthy = results.iter().filter(|r| r.is_healthy()).count(),
            "Bench completed"
        );
        BenchReport {
            results,
            t: chrono::Utc::now().timestamp_millis(),
        }
    }
}

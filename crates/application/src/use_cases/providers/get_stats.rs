use crate::ports::DohResolver;
use ferrous_doh_domain::{MetricsSnapshot, RankedProvider};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct GatewayStats {
    pub providers: Vec<RankedProvider>,
    pub metrics: MetricsSnapshot,
    /// Unix time in milliseconds.
    pub t: i64,
}

pub struct GetStatsUseCase {
    resolver: Arc<dyn DohResolver>,
}

impl GetStatsUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> GatewayStats {
        let metrics = self.resolver.metrics_snapshot().await;
        let providers = self.resolver.ranked_providers().await;
        GatewayStats {
            providers,
            metrics,
            t: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_doh_application::ports::{
    CacheWarmingPort, ProbeResult, UpstreamHealthPort, WarmingStats,
};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct MockHealthPort {
    health_calls: AtomicU64,
    status: u16,
}

impl MockHealthPort {
    pub fn new() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            health_calls: AtomicU64::new(0),
            status,
        }
    }

    pub fn health_call_count(&self) -> u64 {
        self.health_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UpstreamHealthPort for MockHealthPort {
    async fn run_health_check(&self) -> Vec<ProbeResult> {
        self.health_calls.fetch_add(1, Ordering::Relaxed);
        vec![ProbeResult {
            provider: "Cloudflare".to_string(),
            status: self.status,
            rtt: 12,
        }]
    }

    async fn bench(&self) -> Vec<ProbeResult> {
        Vec::new()
    }
}

#[derive(Default)]
pub struct MockWarmer {
    warm_calls: AtomicU64,
}

impl MockWarmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warm_call_count(&self) -> u64 {
        self.warm_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CacheWarmingPort for MockWarmer {
    async fn warm(&self) -> WarmingStats {
        self.warm_calls.fetch_add(1, Ordering::Relaxed);
        WarmingStats {
            attempted: 1,
            warmed: 1,
            ..WarmingStats::default()
        }
    }
}

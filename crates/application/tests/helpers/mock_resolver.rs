use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{DohResolver, ProbeResult, UpstreamHealthPort};
use ferrous_doh_domain::config::upstream::default_providers;
use ferrous_doh_domain::{
    CacheStatus, DohRequest, DohResponse, DomainError, MetricsSnapshot, ProviderMetric,
    QueryClass, RankedProvider,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Records every request and answers with a fixed body, or fails on demand.
#[derive(Clone)]
pub struct MockDohResolver {
    requests: Arc<RwLock<Vec<DohRequest>>>,
    should_fail: Arc<RwLock<bool>>,
    metrics: Arc<RwLock<MetricsSnapshot>>,
    calls: Arc<AtomicU64>,
}

impl MockDohResolver {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            metrics: Arc::new(RwLock::new(MetricsSnapshot::new())),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn set_metric(&self, provider: &str, metric: ProviderMetric) {
        self.metrics.write().await.insert(provider.to_string(), metric);
    }

    pub async fn requests(&self) -> Vec<DohRequest> {
        self.requests.read().await.clone()
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DohResolver for MockDohResolver {
    async fn resolve(&self, request: &DohRequest) -> Result<DohResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.requests.write().await.push(request.clone());

        if *self.should_fail.read().await {
            return Err(DomainError::UpstreamExhausted);
        }

        Ok(DohResponse {
            status: 200,
            body: Bytes::from_static(b"answer"),
            max_age: 300,
            cache_status: CacheStatus::Miss,
            class: if request.force_standard {
                QueryClass::Standard
            } else {
                QueryClass::Gaming
            },
            provider: Some(Arc::from("Cloudflare")),
        })
    }

    async fn ranked_providers(&self) -> Vec<RankedProvider> {
        let metrics = self.metrics.read().await;
        let mut ranked: Vec<_> = default_providers()
            .iter()
            .map(|p| RankedProvider::score(p, metrics.get(p.name.as_ref())))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    async fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.read().await.clone()
    }
}

pub struct MockHealthPort {
    results: Vec<ProbeResult>,
    bench_calls: AtomicU64,
    health_calls: AtomicU64,
}

impl MockHealthPort {
    pub fn new(results: Vec<(&str, u16, u64)>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(provider, status, rtt)| ProbeResult {
                    provider: provider.to_string(),
                    status,
                    rtt,
                })
                .collect(),
            bench_calls: AtomicU64::new(0),
            health_calls: AtomicU64::new(0),
        }
    }

    pub fn bench_calls(&self) -> u64 {
        self.bench_calls.load(Ordering::Relaxed)
    }

    pub fn health_calls(&self) -> u64 {
        self.health_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UpstreamHealthPort for MockHealthPort {
    async fn run_health_check(&self) -> Vec<ProbeResult> {
        self.health_calls.fetch_add(1, Ordering::Relaxed);
        self.results.clone()
    }

    async fn bench(&self) -> Vec<ProbeResult> {
        self.bench_calls.fetch_add(1, Ordering::Relaxed);
        self.results.clone()
    }
}

#![allow(dead_code)]
use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use ferrous_doh_api::{create_api_routes, AppState};
use ferrous_doh_application::ports::{DohResolver, ProbeResult, UpstreamHealthPort};
use ferrous_doh_application::use_cases::{
    GetProvidersUseCase, GetStatsUseCase, HandleDohQueryUseCase, ResolveNameUseCase,
    RunBenchUseCase,
};
use ferrous_doh_domain::config::upstream::default_providers;
use ferrous_doh_domain::dns_wire::FixedIdSource;
use ferrous_doh_domain::{
    CacheStatus, DohRequest, DohResponse, DomainError, MetricsSnapshot, QueryClass,
    RankedProvider,
};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const ANSWER: &[u8] = b"\x12\x34\x81\x80";

/// Resolver double: records requests and answers every one with [`ANSWER`].
pub struct MockDohResolver {
    requests: RwLock<Vec<DohRequest>>,
    outcome: RwLock<Option<DomainError>>,
    cache_status: RwLock<CacheStatus>,
}

impl MockDohResolver {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            outcome: RwLock::new(None),
            cache_status: RwLock::new(CacheStatus::Miss),
        }
    }

    pub async fn fail_with(&self, error: DomainError) {
        *self.outcome.write().await = Some(error);
    }

    pub async fn serve_from_cache(&self) {
        *self.cache_status.write().await = CacheStatus::Hit;
    }

    pub async fn requests(&self) -> Vec<DohRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl DohResolver for MockDohResolver {
    async fn resolve(&self, request: &DohRequest) -> Result<DohResponse, DomainError> {
        self.requests.write().await.push(request.clone());
        if let Some(e) = self.outcome.read().await.clone() {
            return Err(e);
        }
        let class = if request.force_standard {
            QueryClass::Standard
        } else {
            QueryClass::Gaming
        };
        Ok(DohResponse {
            status: 200,
            body: Bytes::from_static(ANSWER),
            max_age: if class.is_gaming() { 600 } else { 300 },
            cache_status: *self.cache_status.read().await,
            class,
            provider: Some(Arc::from("Cloudflare")),
        })
    }

    async fn ranked_providers(&self) -> Vec<RankedProvider> {
        default_providers()
            .iter()
            .map(|p| RankedProvider::score(p, None))
            .collect()
    }

    async fn metrics_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::new()
    }
}

pub struct MockHealthPort;

#[async_trait]
impl UpstreamHealthPort for MockHealthPort {
    async fn run_health_check(&self) -> Vec<ProbeResult> {
        Vec::new()
    }

    async fn bench(&self) -> Vec<ProbeResult> {
        vec![ProbeResult {
            provider: "Cloudflare".to_string(),
            status: 200,
            rtt: 14,
        }]
    }
}

pub fn create_test_app(resolver: Arc<MockDohResolver>, public_origin: Option<&str>) -> Router {
    let state = AppState {
        handle_doh: Arc::new(HandleDohQueryUseCase::new(resolver.clone())),
        resolve_name: Arc::new(ResolveNameUseCase::new(
            resolver.clone(),
            Arc::new(FixedIdSource(0)),
        )),
        get_providers: Arc::new(GetProvidersUseCase::new(resolver.clone())),
        get_stats: Arc::new(GetStatsUseCase::new(resolver)),
        run_bench: Arc::new(RunBenchUseCase::new(Arc::new(MockHealthPort))),
        public_origin: public_origin.map(Arc::from),
    };
    create_api_routes(state)
}

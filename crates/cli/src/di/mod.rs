use ferrous_doh_api::AppState;
use ferrous_doh_application::ports::{KeyValueStore, MetricsStore};
use ferrous_doh_application::services::{CachePolicy, GamingClassifier, ProviderRanker};
use ferrous_doh_application::use_cases::{
    GetProvidersUseCase, GetStatsUseCase, HandleDohQueryUseCase, ResolveNameUseCase,
    RunBenchUseCase,
};
use ferrous_doh_domain::config::MetricsBackend;
use ferrous_doh_domain::dns_wire::{RandomIdSource, TransactionIdSource};
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::doh::{
    CacheWarmer, DohGatewayResolver, FailoverStrategy, FileKvStore, HttpsTransport,
    KvMetricsStore, MemoryKvStore, MemoryResponseCache, RaceStrategy, UpstreamInvoker,
    UpstreamProber,
};
use ferrous_doh_jobs::{CacheWarmJob, HealthCheckJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Everything the HTTP surface and the background jobs share.
pub struct GatewayServices {
    pub resolver: Arc<DohGatewayResolver>,
    pub prober: Arc<UpstreamProber>,
    pub warmer: Arc<CacheWarmer>,
    pub ids: Arc<dyn TransactionIdSource>,
}

impl GatewayServices {
    pub fn new(config: &Config) -> Self {
        let metrics = build_metrics_store(config);
        let ids: Arc<dyn TransactionIdSource> = Arc::new(RandomIdSource);

        let invoker = Arc::new(UpstreamInvoker::new(
            Arc::new(HttpsTransport::new()),
            metrics.clone(),
            &config.upstream,
        ));
        let ranker = Arc::new(ProviderRanker::new(
            config.upstream.providers.clone(),
            metrics,
        ));
        let classifier = Arc::new(GamingClassifier::new(&config.gaming.hints));
        let failover = Arc::new(FailoverStrategy::new(invoker.clone()));
        let race = Arc::new(RaceStrategy::new(
            invoker.clone(),
            config.upstream.racing_providers,
        ));

        let origin = config.server.origin();
        info!(
            providers = ranker.providers().len(),
            racing = config.upstream.racing_providers,
            origin = %origin,
            "Gateway resolver configured"
        );

        let resolver = Arc::new(
            DohGatewayResolver::new(
                ranker.clone(),
                classifier,
                CachePolicy::new(&config.cache),
                race,
                failover.clone(),
                origin,
            )
            .with_cache(Arc::new(MemoryResponseCache::new(config.cache.max_entries))),
        );

        let prober = Arc::new(UpstreamProber::new(
            invoker,
            config.upstream.providers.clone(),
            ids.clone(),
        ));
        let warmer = Arc::new(CacheWarmer::new(
            ranker,
            failover,
            ids.clone(),
            config.gaming.warm_domains.clone(),
        ));
        info!(domains = warmer.domains().len(), "Cache warmer configured");

        Self {
            resolver,
            prober,
            warmer,
            ids,
        }
    }

    pub fn app_state(&self, config: &Config) -> AppState {
        AppState {
            handle_doh: Arc::new(HandleDohQueryUseCase::new(self.resolver.clone())),
            resolve_name: Arc::new(ResolveNameUseCase::new(
                self.resolver.clone(),
                self.ids.clone(),
            )),
            get_providers: Arc::new(GetProvidersUseCase::new(self.resolver.clone())),
            get_stats: Arc::new(GetStatsUseCase::new(self.resolver.clone())),
            run_bench: Arc::new(RunBenchUseCase::new(self.prober.clone())),
            public_origin: config.server.public_origin.as_deref().map(Arc::from),
        }
    }

    pub fn job_runner(&self, config: &Config, shutdown: CancellationToken) -> JobRunner {
        JobRunner::new()
            .with_health_check(
                HealthCheckJob::new(self.prober.clone())
                    .with_interval(config.jobs.health_check_interval_secs),
            )
            .with_cache_warm(
                CacheWarmJob::new(self.warmer.clone())
                    .with_interval(config.jobs.cache_warm_interval_secs),
            )
            .with_shutdown_token(shutdown)
    }
}

fn build_metrics_store(config: &Config) -> Arc<dyn MetricsStore> {
    let kv: Arc<dyn KeyValueStore> = match config.metrics.backend {
        MetricsBackend::Disabled => {
            info!("Provider metrics disabled; ranking uses static weights");
            return Arc::new(KvMetricsStore::disabled());
        }
        MetricsBackend::Memory => Arc::new(MemoryKvStore::new()),
        MetricsBackend::File => {
            info!(path = %config.metrics.path, "Persisting provider metrics to disk");
            Arc::new(FileKvStore::new(&config.metrics.path))
        }
    };
    Arc::new(KvMetricsStore::new(kv, config.metrics.key.clone()))
}

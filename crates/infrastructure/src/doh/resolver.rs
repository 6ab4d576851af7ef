use super::cache::MemoryResponseCache;
use super::load_balancer::ResolutionStrategy;
use async_trait::async_trait;
use ferrous_doh_application::ports::{CachedResponse, DohResolver, ResponseCache};
use ferrous_doh_application::services::{
    CacheDecision, CachePolicy, GamingClassifier, ProviderRanker,
};
use ferrous_doh_domain::dns_wire::{decode_b64url, extract_qname};
use ferrous_doh_domain::{
    CacheStatus, DohRequest, DohResponse, DomainError, MetricsSnapshot, QueryClass,
    RankedProvider,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// The resolution pipeline: classify, consult the cache, rank, race or fail
/// over, then apply the cache policy to whatever came back.
pub struct DohGatewayResolver {
    ranker: Arc<ProviderRanker>,
    classifier: Arc<GamingClassifier>,
    policy: CachePolicy,
    cache: Arc<dyn ResponseCache>,
    race: Arc<dyn ResolutionStrategy>,
    failover: Arc<dyn ResolutionStrategy>,
    origin: Arc<str>,
}

impl DohGatewayResolver {
    pub fn new(
        ranker: Arc<ProviderRanker>,
        classifier: Arc<GamingClassifier>,
        policy: CachePolicy,
        race: Arc<dyn ResolutionStrategy>,
        failover: Arc<dyn ResolutionStrategy>,
        origin: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            ranker,
            classifier,
            policy,
            cache: Arc::new(MemoryResponseCache::new(10_000)),
            race,
            failover,
            origin: origin.into(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    fn classify(&self, request: &DohRequest) -> (String, QueryClass) {
        // Undecodable payloads still go upstream; the provider answers FORMERR.
        let qname = match decode_b64url(&request.dns_b64) {
            Ok(bytes) => extract_qname(&bytes),
            Err(e) => {
                debug!(error = %e, "Query payload is not valid base64url");
                String::new()
            }
        };
        let class = if request.force_standard {
            QueryClass::Standard
        } else {
            self.classifier.classify(&qname)
        };
        (qname, class)
    }
}

#[async_trait]
impl DohResolver for DohGatewayResolver {
    async fn resolve(&self, request: &DohRequest) -> Result<DohResponse, DomainError> {
        let (qname, class) = self.classify(request);
        let key = CachePolicy::cache_key(&self.origin, &request.dns_b64);

        if let Some(hit) = self.cache.lookup(&key).await {
            if hit.is_negative() {
                debug!(qname = %qname, "Negative cache hit");
                return Err(DomainError::UpstreamExhausted);
            }
            debug!(qname = %qname, class = ?hit.class, "Cache hit");
            return Ok(DohResponse {
                status: hit.status,
                body: hit.body,
                max_age: hit.max_age,
                cache_status: CacheStatus::Hit,
                class: hit.class,
                provider: None,
            });
        }

        let ranked = self.ranker.rank().await;
        if ranked.is_empty() {
            return Err(DomainError::NoProviders);
        }

        let strategy = if class.is_gaming() {
            &self.race
        } else {
            &self.failover
        };
        debug!(qname = %qname, class = ?class, strategy = strategy.name(), "Resolving upstream");
        let outcome = strategy.resolve(&ranked, &request.dns_b64).await;

        match (self.policy.decide(outcome.as_ref(), class), outcome) {
            (CacheDecision::Positive { ttl }, Some(outcome)) => {
                self.cache
                    .store(
                        &key,
                        CachedResponse {
                            status: outcome.status,
                            body: outcome.body.clone(),
                            max_age: ttl,
                            class,
                        },
                        ttl,
                    )
                    .await;
                Ok(DohResponse {
                    status: outcome.status,
                    body: outcome.body,
                    max_age: ttl,
                    cache_status: CacheStatus::Miss,
                    class,
                    provider: Some(outcome.provider),
                })
            }
            (decision, _) => {
                warn!(qname = %qname, class = ?class, "All upstream providers failed");
                if let CacheDecision::Negative { ttl } = decision {
                    self.cache
                        .store(
                            &key,
                            CachedResponse {
                                status: 502,
                                body: Default::default(),
                                max_age: ttl,
                                class,
                            },
                            ttl,
                        )
                        .await;
                }
                Err(DomainError::UpstreamExhausted)
            }
        }
    }

    async fn ranked_providers(&self) -> Vec<RankedProvider> {
        self.ranker.rank().await
    }

    async fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.ranker.metrics().read().await
    }
}

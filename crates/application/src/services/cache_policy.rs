use ferrous_doh_domain::config::CacheConfig;
use ferrous_doh_domain::dns_wire::extract_ttl;
use ferrous_doh_domain::{QueryClass, ResolutionOutcome};

/// Path the canonical cache key is built on.
const DOH_PATH: &str = "/dns-query";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    /// Store the upstream answer for `ttl` seconds.
    Positive { ttl: u32 },
    /// Remember the failure for `ttl` seconds.
    Negative { ttl: u32 },
    Skip,
}

/// Cache key and lifetime rules for gateway responses.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    default_ttl: u32,
    gaming_ttl: u32,
    negative_ttl: u32,
    negative_caching: bool,
}

impl CachePolicy {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            default_ttl: config.default_ttl,
            gaming_ttl: config.gaming_ttl,
            negative_ttl: config.negative_ttl,
            negative_caching: config.negative_caching,
        }
    }

    /// Canonical request identity: the encoded query as the `dns` parameter
    /// on `/dns-query` under `origin`. Keys follow the encoded bytes, so two
    /// logically identical queries with different transaction ids do not
    /// share an entry.
    pub fn cache_key(origin: &str, dns_b64: &str) -> String {
        format!("{}{}?dns={}", origin.trim_end_matches('/'), DOH_PATH, dns_b64)
    }

    /// Decides whether and for how long a resolution result is cached.
    /// `None` means every provider failed.
    pub fn decide(&self, outcome: Option<&ResolutionOutcome>, class: QueryClass) -> CacheDecision {
        match outcome {
            Some(o) if o.is_success() => CacheDecision::Positive {
                ttl: self.success_ttl(&o.body, class),
            },
            _ if self.negative_caching => CacheDecision::Negative {
                ttl: self.negative_ttl,
            },
            _ => CacheDecision::Skip,
        }
    }

    fn success_ttl(&self, body: &[u8], class: QueryClass) -> u32 {
        match class {
            QueryClass::Gaming => self.gaming_ttl,
            QueryClass::Standard => extract_ttl(body, self.default_ttl),
        }
    }
}

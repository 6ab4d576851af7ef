use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;

/// Status used for upstream attempts that never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 599;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryClass {
    /// Latency-sensitive traffic (game platforms, launchers, their CDNs).
    Gaming,
    Standard,
}

impl QueryClass {
    pub fn is_gaming(&self) -> bool {
        matches!(self, Self::Gaming)
    }
}

/// Result of one upstream attempt, successful or not.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub provider: Arc<str>,
    pub status: u16,
    pub body: Bytes,
    pub rtt_ms: u64,
}

impl ResolutionOutcome {
    pub fn transport_failure(provider: Arc<str>, rtt_ms: u64) -> Self {
        Self {
            provider,
            status: TRANSPORT_FAILURE_STATUS,
            body: Bytes::new(),
            rtt_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A DoH query as it enters the gateway: the base64url DNS message.
#[derive(Debug, Clone)]
pub struct DohRequest {
    pub dns_b64: Arc<str>,

    /// Skip classification and treat the query as standard traffic.
    pub force_standard: bool,
}

impl DohRequest {
    pub fn new(dns_b64: impl Into<Arc<str>>) -> Self {
        Self {
            dns_b64: dns_b64.into(),
            force_standard: false,
        }
    }

    pub fn standard(dns_b64: impl Into<Arc<str>>) -> Self {
        Self {
            dns_b64: dns_b64.into(),
            force_standard: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DohResponse {
    pub status: u16,
    pub body: Bytes,
    /// Value advertised in `Cache-Control: max-age`.
    pub max_age: u32,
    pub cache_status: CacheStatus,
    pub class: QueryClass,
    /// Provider that answered; `None` when served from cache.
    pub provider: Option<Arc<str>>,
}

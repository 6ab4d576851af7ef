use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Smoothing factor for the round-trip-time moving average.
pub const RTT_SMOOTHING: f64 = 0.3;

/// RTT assumed for providers that have never been observed.
pub const UNSEEN_RTT_MS: f64 = 20.0;

/// Floor applied to the success rate of observed providers.
pub const MIN_SUCCESS_RATE: f64 = 0.1;

/// A public DoH resolver the gateway can forward to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Provider {
    pub name: Arc<str>,

    pub url: Arc<str>,

    /// Static priority bias added to the computed score.
    #[serde(default)]
    pub weight: u32,
}

impl Provider {
    pub fn new(name: &str, url: &str, weight: u32) -> Self {
        Self {
            name: Arc::from(name),
            url: Arc::from(url),
            weight,
        }
    }
}

/// Aggregate outcome counters for one provider.
///
/// Field names are kept short on the wire so snapshots written by older
/// deployments (`{"n", "ok", "rtt"}`) keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProviderMetric {
    #[serde(rename = "n", default)]
    pub attempts: u64,

    #[serde(rename = "ok", default)]
    pub successes: u64,

    #[serde(rename = "rtt", default)]
    pub rtt_ms: f64,
}

impl ProviderMetric {
    pub fn seeded(rtt_ms: u64) -> Self {
        Self {
            attempts: 0,
            successes: 0,
            rtt_ms: rtt_ms as f64,
        }
    }

    /// Folds one observation into the counters and the smoothed RTT.
    pub fn record(&mut self, rtt_ms: u64, success: bool) {
        self.attempts += 1;
        if success {
            self.successes += 1;
        }
        let smoothed = self.rtt_ms * (1.0 - RTT_SMOOTHING) + rtt_ms as f64 * RTT_SMOOTHING;
        self.rtt_ms = smoothed.max(1.0).round();
    }

    pub fn success_rate(&self) -> f64 {
        (self.successes as f64 / self.attempts.max(1) as f64).max(MIN_SUCCESS_RATE)
    }
}

pub type MetricsSnapshot = BTreeMap<String, ProviderMetric>;

/// A provider with the score it was given for one resolution.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProvider {
    #[serde(flatten)]
    pub provider: Provider,

    pub rtt: f64,

    pub score: f64,
}

impl RankedProvider {
    /// `weight + 1000/(rtt+5) + 50*success_rate`, with optimistic defaults
    /// for providers that have no metric yet.
    pub fn score(provider: &Provider, metric: Option<&ProviderMetric>) -> Self {
        let rtt = metric
            .map(|m| m.rtt_ms)
            .filter(|rtt| *rtt > 0.0)
            .unwrap_or(UNSEEN_RTT_MS);
        let success_rate = metric.map(ProviderMetric::success_rate).unwrap_or(1.0);
        let score = provider.weight as f64 + 1000.0 / (rtt + 5.0) + 50.0 * success_rate;

        Self {
            provider: provider.clone(),
            rtt,
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.provider.name
    }
}

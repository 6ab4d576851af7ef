use crate::Provider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,

    /// How many top-ranked providers a gaming query races.
    #[serde(default = "default_racing_providers")]
    pub racing_providers: usize,

    /// Deadline for a regular upstream attempt, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Deadline for racing attempts; never longer than `timeout_ms`.
    #[serde(default = "default_short_timeout_ms")]
    pub short_timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn effective_short_timeout_ms(&self) -> u64 {
        self.short_timeout_ms.min(self.timeout_ms)
    }

    /// RTT recorded for attempts that never got an HTTP response.
    pub fn failure_penalty_ms(&self) -> u64 {
        self.timeout_ms.saturating_mul(2)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            racing_providers: default_racing_providers(),
            timeout_ms: default_timeout_ms(),
            short_timeout_ms: default_short_timeout_ms(),
        }
    }
}

pub fn default_providers() -> Vec<Provider> {
    vec![
        Provider::new("Cloudflare", "https://cloudflare-dns.com/dns-query", 35),
        Provider::new("Google", "https://dns.google/dns-query", 25),
        Provider::new("Quad9", "https://dns.quad9.net/dns-query", 15),
        Provider::new("OpenDNS", "https://doh.opendns.com/dns-query", 10),
        Provider::new("AdGuard", "https://dns.adguard.com/dns-query", 8),
        Provider::new("ControlD", "https://freedns.controld.com/p2", 7),
    ]
}

fn default_racing_providers() -> usize {
    3
}

fn default_timeout_ms() -> u64 {
    1200
}

fn default_short_timeout_ms() -> u64 {
    800
}

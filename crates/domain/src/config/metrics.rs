use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricsBackend {
    /// Process-local; metrics reset on restart.
    #[default]
    Memory,

    /// One file per key under `path`.
    File,

    /// Metrics are neither read nor written; every provider ranks as unseen.
    Disabled,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub backend: MetricsBackend,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            backend: MetricsBackend::default(),
            path: default_path(),
            key: default_key(),
        }
    }
}

fn default_path() -> String {
    "./data/metrics".to_string()
}

fn default_key() -> String {
    "metrics_v1".to_string()
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_health_check_interval")]
    pub health_check_interval_secs: u64,

    #[serde(default = "default_cache_warm_interval")]
    pub cache_warm_interval_secs: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            health_check_interval_secs: default_health_check_interval(),
            cache_warm_interval_secs: default_cache_warm_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_health_check_interval() -> u64 {
    300
}

fn default_cache_warm_interval() -> u64 {
    900
}

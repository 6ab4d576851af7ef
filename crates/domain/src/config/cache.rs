use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// TTL used for standard answers when none can be read from the message.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_gaming_ttl")]
    pub gaming_ttl: u32,

    #[serde(default = "default_negative_ttl")]
    pub negative_ttl: u32,

    /// Remember resolutions where every provider failed for `negative_ttl`
    /// seconds.
    #[serde(default)]
    pub negative_caching: bool,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            gaming_ttl: default_gaming_ttl(),
            negative_ttl: default_negative_ttl(),
            negative_caching: false,
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_gaming_ttl() -> u32 {
    600
}

fn default_negative_ttl() -> u32 {
    60
}

fn default_max_entries() -> usize {
    10_000
}

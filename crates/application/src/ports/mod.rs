mod cache_warming_port;
mod doh_resolver;
mod key_value_store;
mod metrics_store;
mod response_cache;
mod upstream_health_port;

pub use cache_warming_port::{CacheWarmingPort, WarmingStats};
pub use doh_resolver::DohResolver;
pub use key_value_store::KeyValueStore;
pub use metrics_store::MetricsStore;
pub use response_cache::{CachedResponse, ResponseCache};
pub use upstream_health_port::{ProbeResult, UpstreamHealthPort};

pub mod cache;
pub mod cache_warming;
pub mod health;
pub mod kv;
pub mod load_balancer;
pub mod metrics;
pub mod resolver;
pub mod transport;

pub use cache::MemoryResponseCache;
pub use cache_warming::CacheWarmer;
pub use health::UpstreamProber;
pub use kv::{FileKvStore, MemoryKvStore};
pub use load_balancer::{FailoverStrategy, RaceStrategy, ResolutionStrategy, UpstreamInvoker};
pub use metrics::KvMetricsStore;
pub use resolver::DohGatewayResolver;
pub use transport::{DohTransport, HttpReply, HttpsTransport};

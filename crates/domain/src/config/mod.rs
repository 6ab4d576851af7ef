pub mod cache;
pub mod errors;
pub mod gaming;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use gaming::GamingConfig;
pub use jobs::JobsConfig;
pub use logging::LoggingConfig;
pub use metrics::{MetricsBackend, MetricsConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

pub mod cache_warm;
pub mod health_check;
pub mod runner;

pub use cache_warm::CacheWarmJob;
pub use health_check::HealthCheckJob;
pub use runner::JobRunner;

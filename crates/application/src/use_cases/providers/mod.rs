mod get_providers;
mod get_stats;
mod run_bench;

pub use get_providers::GetProvidersUseCase;
pub use get_stats::{GatewayStats, GetStatsUseCase};
pub use run_bench::{BenchReport, RunBenchUseCase};

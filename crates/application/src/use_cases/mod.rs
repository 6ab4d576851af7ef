pub mod doh;
pub mod providers;

pub use doh::{DohPayload, HandleDohQueryUseCase, ResolveNameUseCase};
pub use providers::{
    BenchReport, GatewayStats, GetProvidersUseCase, GetStatsUseCase, RunBenchUseCase,
};

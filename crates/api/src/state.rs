use ferrous_doh_application::use_cases::{
    GetProvidersUseCase, GetStatsUseCase, HandleDohQueryUseCase, ResolveNameUseCase,
    RunBenchUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_doh: Arc<HandleDohQueryUseCase>,
    pub resolve_name: Arc<ResolveNameUseCase>,
    pub get_providers: Arc<GetProvidersUseCase>,
    pub get_stats: Arc<GetStatsUseCase>,
    pub run_bench: Arc<RunBenchUseCase>,
    /// Advertised on the landing page instead of the request's `Host`.
    pub public_origin: Option<Arc<str>>,
}

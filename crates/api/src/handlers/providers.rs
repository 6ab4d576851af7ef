use crate::state::AppState;
use axum::{extract::State, Json};
use ferrous_doh_application::use_cases::{BenchReport, GatewayStats};
use ferrous_doh_domain::RankedProvider;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<RankedProvider>,
}

pub async fn get_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: state.get_providers.execute().await,
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<GatewayStats> {
    Json(state.get_stats.execute().await)
}

pub async fn run_bench(State(state): State<AppState>) -> Json<BenchReport> {
    Json(state.run_bench.execute().await)
}

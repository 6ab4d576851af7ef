mod helpers;

use ferrous_doh_application::use_cases::{GetProvidersUseCase, GetStatsUseCase, RunBenchUseCase};
use ferrous_doh_domain::ProviderMetric;
use helpers::{MockDohResolver, MockHealthPort};
use std::sync::Arc;

#[tokio::test]
async fn test_providers_ranked_by_static_weight_without_metrics() {
    let resolver = Arc::new(MockDohResolver::new());

    let ranked = GetProvidersUseCase::new(resolver).execute().await;

    let names: Vec<_> = ranked.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(
        names,
        ["Cloudflare", "Google", "Quad9", "OpenDNS", "AdGuard", "ControlD"]
    );
    assert!(ranked.iter().all(|p| p.rtt == 20.0));
}

#[tokio::test]
async fn test_stats_include_metrics_and_timestamp() {
    let resolver = Arc::new(MockDohResolver::new());
    resolver
        .set_metric(
            "Quad9",
            ProviderMetric {
                attempts: 4,
                successes: 4,
                rtt_ms: 5.0,
            },
        )
        .await;

    let stats = GetStatsUseCase::new(resolver).execute().await;

    assert_eq!(stats.providers[0].name(), "Quad9");
    assert_eq!(stats.metrics["Quad9"].attempts, 4);
    assert!(stats.t > 0);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["metrics"]["Quad9"]["n"], 4);
    assert_eq!(json["providers"][0]["name"], "Quad9");
}

#[tokio::test]
async fn test_bench_reports_every_probe() {
    let health = Arc::new(MockHealthPort::new(vec![
        ("Cloudflare", 200, 12),
        ("Google", 599, 2400),
    ]));

    let report = RunBenchUseCase::new(health.clone()).execute().await;

    assert_eq!(report.results.len(), 2);
    assert!(report.results[0].is_healthy());
    assert!(!report.results[1].is_healthy());
    assert_eq!(health.bench_calls(), 1);
    assert_eq!(health.health_calls(), 0);
}

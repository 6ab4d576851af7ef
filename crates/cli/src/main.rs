use clap::Parser;
use ferrous_doh_domain::CliOverrides;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - latency-aware DNS-over-HTTPS gateway")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Public origin used for cache keys and the landing page
    #[arg(long, value_name = "URL")]
    public_origin: Option<String>,

    /// Persist provider metrics to this directory
    #[arg(long, value_name = "DIR")]
    metrics_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable periodic health checks and cache warming
    #[arg(long)]
    no_jobs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        public_origin: cli.public_origin,
        metrics_path: cli.metrics_path,
        log_level: cli.log_level,
        no_jobs: cli.no_jobs,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    let services = di::GatewayServices::new(&config);

    if config.jobs.enabled {
        services.job_runner(&config, shutdown.clone()).start().await;
    } else {
        info!("Background jobs disabled");
    }

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, services.app_state(&config), shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

//! Public holiday lookup service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               HOLIDAY SERVICE                │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ holidays │──▶│ upstream  │──┼──▶ Calendarific
//!                    │  │ server  │   │ service  │   │  client   │  │
//!   Client Response  │  └─────────┘   └──────────┘   └───────────┘  │
//!   ◀────────────────┼──── JSON / HTML / Prometheus text            │
//!                    │                                              │
//!                    │  config · observability · lifecycle          │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use holiday_proxy::config::resolve_config;
use holiday_proxy::observability::init_logging;
use holiday_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "holiday-proxy")]
#[command(about = "Public holiday lookup service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!("holiday-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );
    if config.upstream.api_key.is_empty() {
        tracing::warn!("CALENDARIFIC_API_KEY is not set; /api/holidays will answer 500");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let _signals = shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

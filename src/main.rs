use axum::http::{HeaderValue, Method};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledger_core::cli::{Cli, Commands, handle_config_validate};
use ledger_core::config::Config;
use ledger_core::store::TransactionStore;
use ledger_core::{AppState, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Config) => handle_config_validate(&config),
        Some(Commands::Serve) | None => serve(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let store = TransactionStore::new();
    if config.strict_refunds {
        tracing::info!("Strict refund validation enabled");
    }

    let state = AppState {
        store,
        strict_refunds: config.strict_refunds,
        start_time: Instant::now(),
    };

    let mut app = create_app(state);
    if let Some(origins) = &config.cors_allowed_origins {
        app = app.layer(cors_layer(origins)?);
        tracing::info!("CORS enabled for origins: {}", origins);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(raw: &str) -> anyhow::Result<CorsLayer> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<HeaderValue>)
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        anyhow::bail!("CORS_ALLOWED_ORIGINS must be a comma-separated list of origins");
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

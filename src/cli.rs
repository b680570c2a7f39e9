use crate::config::Config;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ledger-core")]
#[command(about = "Ledger Core - Payment Transaction Recorder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Configuration validation
    Config,
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    println!("Configuration:");
    println!("  Server Port: {}", config.server_port);
    println!("  Strict Refunds: {}", config.strict_refunds);
    println!(
        "  CORS Allowed Origins: {}",
        config.cors_allowed_origins.as_deref().unwrap_or("(none)")
    );

    tracing::info!("Configuration is valid");
    println!("✓ Configuration is valid");

    Ok(())
}

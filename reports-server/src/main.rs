//! Reports dashboard server binary

use anyhow::Result;
use clap::Parser;
use reports_config::{ConfigLoader, DashboardConfig};
use std::path::PathBuf;

use reports_server::Server;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML, or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Report fixture file (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    fixtures: Option<PathBuf>,

    /// Print default configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", DashboardConfig::generate_sample());
        return Ok(());
    }

    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;
    apply_cli_overrides(&mut config, &cli)?;

    let server = Server::new(config).await?;
    server.start().await
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut DashboardConfig, cli: &Cli) -> Result<()> {
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if let Some(fixtures) = &cli.fixtures {
        config.data.fixture_path = Some(fixtures.clone());
    }

    config
        .validate_all()
        .map_err(|e| anyhow::anyhow!("Invalid configuration after CLI overrides: {}", e))
}

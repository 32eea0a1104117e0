use clap::Parser;
use std::path::PathBuf;

use quantum_dashboard_server::app;
use quantum_dashboard_server::shared::types::app::DashboardError;
use quantum_dashboard_server::shared::util::config;

#[derive(Parser)]
#[command(about = "Simulated quantum job dashboard backend")]
struct Cli {
    /// Path to the TOML config
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// Overrides server.host
    #[arg(long)]
    host: Option<String>,
    /// Overrides server.port
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> Result<(), DashboardError> {
    let cli = Cli::parse();
    let mut config = config::load_config(&cli.config)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    app::init_logging(&config);
    app::start(config).await
}

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use bookshelf::catalog::controller::router;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Configuration, DEFAULT_CATALOG_URL, DEFAULT_DATA_FILE, DEFAULT_LOOKUP_TIMEOUT_SECS};
use bookshelf::utils::logging::setup_tracing;

#[derive(Parser, Debug)]
#[command(about = "HTTP service for the book catalog")]
struct CliArgs {
    /// Json file holding the catalog.
    #[clap(long, env = "LIBRARY_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    /// Base url of the Open Library compatible bibliographic service.
    #[clap(long, env = "LIBRARY_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    #[clap(long, default_value_t = DEFAULT_LOOKUP_TIMEOUT_SECS)]
    pub lookup_timeout_secs: u64,

    #[clap(long, default_value_t = 3001)]
    pub port: u16,

    #[clap(long)]
    pub json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    setup_tracing("info", cli_args.json_logs);

    let config = Configuration::new(&cli_args.data_file)
        .with_catalog_url(&cli_args.catalog_url)
        .with_lookup_timeout(Duration::from_secs(cli_args.lookup_timeout_secs));
    let catalog_service = create_catalog_service(&config).await
        .with_context(|| format!("failed to open catalog {}", config.data_file.display()))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cli_args.port));
    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, data_file = %config.data_file.display(), catalog_url = config.catalog_url.as_str(), "catalog listening");

    let app = router(AppState::new(catalog_service));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::domain::{Configuration, DEFAULT_CATALOG_URL, DEFAULT_DATA_FILE, DEFAULT_LOOKUP_TIMEOUT_SECS};
use bookshelf::shelf::menu::Menu;
use bookshelf::utils::logging::setup_tracing;

#[derive(Parser, Debug)]
#[command(about = "Interactive menu for the book catalog")]
struct CliArgs {
    #[clap(long, env = "LIBRARY_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    #[clap(long, env = "LIBRARY_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    #[clap(long, default_value_t = DEFAULT_LOOKUP_TIMEOUT_SECS)]
    pub lookup_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    // keep the menu readable, only warnings and errors are logged by default
    setup_tracing("warn", false);

    let config = Configuration::new(&cli_args.data_file)
        .with_catalog_url(&cli_args.catalog_url)
        .with_lookup_timeout(Duration::from_secs(cli_args.lookup_timeout_secs));
    let catalog_service = create_catalog_service(&config).await
        .with_context(|| format!("failed to open catalog {}", config.data_file.display()))?;

    let mut menu = Menu::new(catalog_service, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    menu.run().await?;
    Ok(())
}

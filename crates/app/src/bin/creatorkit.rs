// CreatorKit - Command-line client

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use creatorkit_app::cli::{execute, Cli};
use creatorkit_app::App;
use creatorkit_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.rust_log))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "Configuration loaded");

    let app = App::from_config(&config).map_err(|e| {
        error!("Failed to create application: {}", e);
        e
    })?;

    let output = execute(&app, cli.command).await?;
    println!("{}", output.trim_end());

    Ok(())
}

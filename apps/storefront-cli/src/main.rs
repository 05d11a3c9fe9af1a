use clap::Parser;

use storefront_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs so the integration tests can reach it
    storefront_cli::run(Cli::parse()).await
}

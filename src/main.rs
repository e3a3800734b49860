mod cli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    codehub_client::logging::init_tracing();
    cli::run(cli::Cli::parse()).await
}

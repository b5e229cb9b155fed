use anyhow::Result;
use clap::Parser;
use skydash::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skydash::run(cli).await
}

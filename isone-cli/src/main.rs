//! ISO-NE CLI - summarize or export the energy dashboard from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "isone-cli",
    version,
    about = "ISO New England energy market dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: isone_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = isone_cmd::run(cli.command).await {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

//! DWD CLI - Command line access to the places of worship dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dwd-cli",
    version,
    about = "Places of worship in France: KPIs, chart data and CSV export"
)]
struct Cli {
    #[command(subcommand)]
    command: dwd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    dwd_cmd::run(cli.command).await
}

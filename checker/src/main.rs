//! Availability Checker Server Entry Point

use availability_checker::cli::{Cli, Commands};
use availability_checker::prober::Prober;
use availability_checker::{config, logging, server, AppState};
use availability_checker_common::config::ServerConfig;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check(args)) => availability_checker::cli::check::execute(&args).await,
        Some(Commands::Serve(args)) => {
            logging::init()?;
            run_server(args.resolve()).await
        }
        None => {
            logging::init()?;
            run_server(config::load_server_config()).await
        }
    }
}

async fn run_server(server_config: ServerConfig) -> anyhow::Result<()> {
    info!("Availability Checker v{}", env!("CARGO_PKG_VERSION"));

    let probe_config = config::load_probe_config()?;
    info!(
        max_batch_size = probe_config.max_batch_size,
        concurrency_limit = probe_config.concurrency_limit,
        probe_timeout_ms = probe_config.probe_timeout_ms,
        "Probe configuration loaded"
    );

    // チケットプールはここで1つだけ作成し、全リクエストで共有する
    let state = AppState::new(Prober::from_config(probe_config));

    server::run(state, &server_config.bind_addr()).await
}

use std::path::PathBuf;

use clap::Parser;
use kalah_common::{log, log_warn, logger};
use kalah_server::cleanup_task::CleanupTask;
use kalah_server::game_registry::GameRegistry;
use kalah_server::server_config::get_config_manager;
use kalah_server::web_server::run_web_server;

#[derive(Parser)]
#[command(name = "kalah_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;
    let addr = config.web.socket_addr()?;

    let registry = GameRegistry::new(config.board);

    let cleanup_task = CleanupTask::new(
        registry.clone(),
        config.cleanup.check_interval(),
        config.cleanup.inactivity_timeout(),
    );
    tokio::spawn(async move {
        cleanup_task.run().await;
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    log!(
        "Kalah server starting with {} pits x {} stones",
        config.board.pits_per_player,
        config.board.stones_per_pit
    );
    run_web_server(registry, addr, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}

use tg_db::SqliteCredentialStore;
use tg_server::{AppState, build_router, build_services, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = tg_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = tg_db::connect(&config.database_path()?, config.database.max_connections).await?;
    let store = Arc::new(SqliteCredentialStore::new(pool.clone()));

    let services = build_services(&config, store)?;
    let app = build_router(AppState::new(services.identity));

    let api_listener = TcpListener::bind(config.bind_addr()).await?;
    let rpc_listener = TcpListener::bind(config.rpc_bind_addr()).await?;
    info!("HTTP API listening on {}", api_listener.local_addr()?);

    // Both listeners stop on the same signal
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
        let _ = shutdown_tx.send(true);
    });

    let rpc = tokio::spawn(tg_rpc::serve(
        rpc_listener,
        services.validator,
        wait_for_shutdown(shutdown_rx.clone()),
    ));

    axum::serve(api_listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await?;

    rpc.await??;
    pool.close().await;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    // A dropped sender also means shut down
    let _ = rx.wait_for(|stop| *stop).await;
}

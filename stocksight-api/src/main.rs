use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use stocksight_api::{router, ApiConfig, AppState};
use stocksight_core::{seed, InventoryStore, MemoryStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inventory dashboard API server
#[derive(Parser, Debug)]
#[command(name = "stocksight-api")]
#[command(about = "Serves the stocksight inventory dashboard API")]
struct Cli {
    /// YAML config file (takes precedence over STOCKSIGHT_CONFIG_PATH)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, e.g. 127.0.0.1:5000
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ApiConfig::load_from_file(path)?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            config
        }
        None => ApiConfig::load()?,
    };
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    config.validate()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Loaded configuration: {:?}", config);

    let store: Arc<dyn InventoryStore> = Arc::new(MemoryStore::new());
    if config.seed_mock_data {
        seed::seed_mock_data(store.as_ref());
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(store, config)?;
    let app = router(state);

    // Start server
    let listener = TcpListener::bind(&bind_address).await?;
    let addr = listener.local_addr()?;
    info!("Stocksight API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Stocksight API stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

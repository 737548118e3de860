//! Product resource service.
//!
//! Serves list/create/update/delete for product records over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │               PRODUCT SERVICE                 │
//!                 │                                               │
//!   Request       │  ┌────────┐   ┌────────────┐   ┌──────────┐  │
//!   ──────────────┼─▶│  http  │──▶│ validation │──▶│  store   │  │
//!                 │  │ server │   │  handler   │   │ (trait)  │  │
//!   Response      │  └────────┘   └────────────┘   └──────────┘  │
//!   ◀─────────────┼──── Reply { status, body } ◀────────┘        │
//!                 │                                               │
//!                 │  config · observability · lifecycle           │
//!                 └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use product_service::config::{load_config, ServiceConfig};
use product_service::lifecycle::{shutdown_signal, Shutdown};
use product_service::observability::{logging, metrics};
use product_service::product::InMemoryProductStore;
use product_service::HttpServer;

#[derive(Parser)]
#[command(name = "product-service")]
#[command(about = "HTTP service for product records", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seeded_products = config.store.seed.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = Arc::new(InMemoryProductStore::with_products(config.store.seed.clone()));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! uibridge — application dispatch server.
//!
//! A single-process HTTP shim publishing an application bundle (named
//! widget-render functions and named listener functions) to a remote UI
//! client.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────┐
//!                      │                UIBRIDGE SERVER                  │
//!                      │                                                 │
//!   POST body          │  ┌────────┐   ┌──────────┐   ┌─────────────┐  │
//!   ───────────────────┼─▶│  http  │──▶│ dispatch │──▶│  app host   │  │
//!                      │  │ server │   │ classify │   │ (lazy-once) │  │
//!                      │  └────────┘   └────┬─────┘   └──────┬──────┘  │
//!                      │                    │                 │         │
//!                      │                    ▼                 ▼         │
//!                      │   resource dir ◀─ resource   widget/listener/  │
//!                      │   (image files)   handler    manifest handlers │
//!                      │                                                 │
//!   response           │  {manifest} | {widget} | empty | file bytes |  │
//!   ◀──────────────────┼─ plain-text error (404/500)                    │
//!                      │                                                 │
//!                      │  ┌──────────────────────────────────────────┐  │
//!                      │  │          Cross-Cutting Concerns           │  │
//!                      │  │  config (file+env) · request IDs · body   │  │
//!                      │  │  limits · tracing · lifecycle/shutdown    │  │
//!                      │  └──────────────────────────────────────────┘  │
//!                      └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uibridge::app::{demo, AppHost};
use uibridge::config::resolve_config;
use uibridge::http::HttpServer;
use uibridge::lifecycle::{spawn_signal_listener, Shutdown};

#[derive(Parser)]
#[command(name = "uibridge")]
#[command(about = "Application dispatch server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overriding file and environment.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // File config, then environment overrides, re-validated.
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.listener.port = port;
    }

    // RUST_LOG wins; the configured level is the fallback.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "uibridge={level},tower_http={level}",
                    level = config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("uibridge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        address = %config.bind_address(),
        max_json_size = %config.limits.max_json_size,
        max_raw_size = %config.limits.max_raw_size,
        raw_body = config.limits.raw_body,
        resource_dir = %config.resources.dir,
        "Configuration loaded"
    );

    // The built-in demo application; deployments embed their own loader.
    let host = Arc::new(AppHost::new(|| async { Ok(demo::bundle()) }));

    let shutdown = Arc::new(Shutdown::new());
    spawn_signal_listener(shutdown.clone());

    let listener = TcpListener::bind(config.bind_address()).await?;
    let server = HttpServer::new(config, host)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

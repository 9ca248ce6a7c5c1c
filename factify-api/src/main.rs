//! factify-api - fact-check aggregation service
//!
//! Accepts text from the browser extension, fans it out to AI analysis,
//! fact-check databases and source discovery, and returns one verdict.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use factify_common::config::{LogFormat, LoggingConfig};
use factify_common::Settings;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use factify_api::providers::ProviderSet;
use factify_api::AppState;

/// Command-line arguments for factify-api
#[derive(Parser, Debug)]
#[command(name = "factify-api")]
#[command(about = "Fact-check aggregation API for the Factify extension")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "FACTIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (overrides configuration)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development
    let dotenv_path = dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    init_tracing(&settings.logging)?;

    info!("Starting {} v{}", settings.app_name, settings.version);
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let providers = ProviderSet::from_settings(&settings).context("Failed to initialize providers")?;
    info!(
        ai_provider = providers.analysis.name(),
        ai_configured = providers.analysis.is_configured(),
        "AI provider selected"
    );
    for checker in &providers.fact_checkers {
        info!(
            database = checker.name(),
            configured = checker.is_configured(),
            "Fact-check database registered"
        );
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;

    let state = AppState::new(settings, providers);
    let app = factify_api::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", host, port))?;
    let addr = listener.local_addr().context("Listener has no local address")?;

    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},tower_http=info", logging.level)))
        .context("Invalid log level")?;

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
    .context("Failed to initialize logging")
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

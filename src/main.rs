//! Process bootstrap for the diagnostic endpoint.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use header_probe::{HttpServer, Identity, ServerConfig};

/// Diagnostic HTTP endpoint that reports request metadata and headers.
#[derive(Parser)]
#[command(name = "header-probe", version, about)]
struct Cli {
    /// Host to listen on (overrides LISTEN_HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides LISTEN_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "header_probe=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("header-probe v0.1.0 starting");

    let cli = Cli::parse();

    // Load configuration: defaults, then environment, then CLI flags
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = cli.host {
        config.listener.host = host;
    }
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    // Resolve identity once; read-only for the process lifetime
    let identity = Identity::from_env();

    tracing::info!(
        hostname = %identity.hostname(),
        bind_address = %config.listener.bind_address(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(identity);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! pokedex server
//!
//! Bootstraps one `ResourceClient` for the whole process and serves routes
//! that reach it through the client provider.
//!
//! ```text
//!   config (TOML / defaults)
//!        │
//!        ▼
//!   ResourceClient ──Arc──▶ ClientProvider ──▶ ClientProviderLayer
//!                                                     │
//!   GET /pokemon?offset=&limit= ──▶ axum Router ──────┘──▶ get_client().list_page()
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use pokedex::config::load_or_default;
use pokedex::http::{shutdown_signal, HttpServer};
use pokedex::observability::logging;
use pokedex::ResourceClient;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Serve PokeAPI listings through a shared client", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init(&config.observability);

    tracing::info!("pokedex v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        base_url = %config.client.base_url,
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    // One client for the whole session.
    let client = Arc::new(ResourceClient::new(&config.client)?);
    tracing::info!(
        base_url = %client.base_url(),
        endpoint = %client.endpoint(),
        "Session client ready"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config, client);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

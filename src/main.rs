//! cardvault entry point
//!
//! Initializes logging, builds the server, and serves until the process
//! is stopped. There is no configuration surface: the port is fixed and
//! all state is volatile.

use cardvault::http_server::HttpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = HttpServer::new().start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! MathLab API server binary.

use std::net::IpAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mathlab_server::server::config::DEFAULT_BODY_LIMIT;
use mathlab_server::{ServerConfig, start_server};

#[derive(Debug, Parser)]
#[command(name = "mathlab-server", version, about = "MathLab HTTP API server")]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Allow requests from any origin (development only)
    #[arg(long)]
    cors_all: bool,

    /// Allowed CORS origin, e.g. https://mathlab.example.com
    #[arg(long, conflicts_with = "cors_all")]
    origin: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
    body_limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        cors_all: cli.cors_all,
        origin: cli.origin,
        body_limit: cli.body_limit,
    };

    start_server(config).await
}

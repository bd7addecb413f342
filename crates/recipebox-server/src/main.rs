use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use recipebox_service::LocalService;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "recipebox-server", about = "In-memory recipe REST service")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "RECIPEBOX_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "RECIPEBOX_PORT", default_value = "8000")]
    port: u16,

    /// Preload a few sample recipes
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recipebox_server=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let addr = SocketAddr::new(cli.bind.parse()?, cli.port);

    let service = if cli.seed {
        let samples = recipebox_server::seed::sample_recipes();
        info!("seeding {} sample recipes", samples.len());
        LocalService::with_recipes(samples)
    } else {
        LocalService::new()
    };

    let listener = TcpListener::bind(addr).await?;
    recipebox_server::serve(listener, service).await
}

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;

/// Standalone in-memory todo list service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "TODO_API_ADDR", default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_server=debug,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    let listener = TcpListener::bind(args.addr).await?;
    todo_server::run(listener).await?;
    Ok(())
}

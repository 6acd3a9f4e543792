//! Launches the todo service and the dashboard in one process.
//!
//! The todo service gets its own OS thread and multi-threaded runtime; the
//! dashboard runs on a single-threaded runtime on the main thread. The two
//! only talk over loopback HTTP.

use anyhow::Context;
use clap::Parser;
use todo_dashboard::{Config, DashboardState};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_server=debug,todo_dashboard=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::parse();

    if config.external_api {
        tracing::info!(api = %config.api_url(), "using external todo service");
    } else {
        // Bind before spawning so an address conflict fails startup.
        let listener = std::net::TcpListener::bind(config.api_addr)
            .with_context(|| format!("binding todo service to {}", config.api_addr))?;
        listener.set_nonblocking(true)?;
        std::thread::Builder::new()
            .name("todo-service".to_string())
            .spawn(move || {
                if let Err(e) = serve_todo_service(listener) {
                    tracing::error!(error = %e, "todo service stopped");
                }
            })
            .context("spawning todo service thread")?;
    }

    let state = DashboardState::from_config(&config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building dashboard runtime")?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.addr)
            .await
            .with_context(|| format!("binding dashboard to {}", config.addr))?;
        todo_dashboard::run(listener, state).await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn serve_todo_service(listener: std::net::TcpListener) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building todo service runtime")?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::from_std(listener)?;
        todo_server::run(listener).await?;
        Ok::<(), anyhow::Error>(())
    })
}

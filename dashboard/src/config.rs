//! Command-line and environment configuration for the dashboard launcher.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_FETCH_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Todo demo dashboard: validation, outbound fetch and todo list panels
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the dashboard listens on
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,

    /// Address the in-process todo service binds to
    #[arg(long, env = "TODO_API_ADDR", default_value = "127.0.0.1:8000")]
    pub api_addr: SocketAddr,

    /// Base URL the todo panel talks to (defaults to http://<api-addr>)
    #[arg(long, env = "TODO_API_URL")]
    pub api_url: Option<String>,

    /// Do not start the todo service; use an already running one
    #[arg(long)]
    pub external_api: bool,

    /// Timeout for every outbound request, in seconds (at least 1)
    #[arg(
        long,
        env = "FETCH_TIMEOUT_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub fetch_timeout_secs: u64,

    /// URL pre-filled in the fetch panel
    #[arg(long, env = "DEFAULT_FETCH_URL", default_value = DEFAULT_FETCH_URL)]
    pub default_fetch_url: String,
}

impl Config {
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.api_addr))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

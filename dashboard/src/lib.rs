//! Interactive dashboard for the todo demo.
//!
//! # Overview
//! Serves one HTML page with three independent panels:
//! - profile validation, run in-process against `todo_core::UserProfile`;
//! - an outbound GET to any JSON URL;
//! - append/list calls to the todo service, rendered as a table.
//!
//! # Design
//! The dashboard never touches the todo list directly. It builds requests
//! with `todo_core`, executes them over the network with a blocking `ureq`
//! agent, and renders whatever comes back, errors included.

pub mod config;
pub mod panels;
pub mod render;
pub mod transport;

use axum::{
    routing::{get, post},
    Router,
};
use todo_core::TodoClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use transport::Transport;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct DashboardState {
    pub client: TodoClient,
    pub transport: Transport,
    pub default_fetch_url: String,
}

impl DashboardState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: TodoClient::new(&config.api_url()),
            transport: Transport::new(config.fetch_timeout()),
            default_fetch_url: config.default_fetch_url.clone(),
        }
    }
}

pub fn app(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(panels::index))
        .route("/panels/profile", post(panels::profile))
        .route("/panels/fetch", post(panels::fetch))
        .route("/panels/todos/add", post(panels::add_todo))
        .route("/panels/todos/list", post(panels::list_todos))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: DashboardState) -> Result<(), std::io::Error> {
    tracing::info!(
        addr = %listener.local_addr()?,
        api = %state.client.base_url(),
        "dashboard listening"
    );
    axum::serve(listener, app(state)).await
}

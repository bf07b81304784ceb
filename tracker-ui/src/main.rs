//! Tracker UI server - web interface for the city Great Work table.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use tracker::io::config::load_config;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "tracker-ui")]
#[command(about = "Web UI for the Great Work building slot tracker")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Path to the config file
    #[arg(long, default_value = "tracker.toml")]
    config: PathBuf,

    /// Override the city data file from the config
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Directory containing UI static files (defaults to ./ui/dist)
    #[arg(long)]
    ui_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tracker_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let data_path = match args.data_file {
        Some(path) => path,
        None => load_config(&args.config)?.data_file,
    };
    info!(data_path = %data_path.display(), "starting tracker-ui");

    let state = AppState::new(data_path);

    // Build router
    let api_router = routes::api_router();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(cors)
        .with_state(state);

    // Serve static UI files if available
    let ui_dir = args
        .ui_dir
        .unwrap_or_else(|| PathBuf::from("ui").join("dist"));

    if ui_dir.exists() {
        info!(ui_dir = %ui_dir.display(), "serving static UI files");
        app = app.fallback_service(ServeDir::new(ui_dir).append_index_html_on_directories(true));
    } else {
        info!(ui_dir = %ui_dir.display(), "UI directory not found, API-only mode");
    }

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

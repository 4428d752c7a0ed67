//! Binary crate for the weather HTTP service.
//!
//! This crate focuses on:
//! - Parsing arguments and loading provider credentials
//! - Wiring the aggregator into the axum router
//! - Serving the two routes

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use weather_core::{Config, MultiProvider};

mod app;
mod error;
mod routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML file holding provider API keys.
    #[arg(short, long, env = "SECRETS_FILE_PATH", default_value = "secrets.toml")]
    secrets: PathBuf,

    #[arg(short, long, env = "PORT", default_value_t = 8888)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Credentials are read once here; a missing secrets file aborts startup.
    let config = Config::load_from(&args.secrets)?;
    let aggregator = MultiProvider::from_config(&config)?;

    let state = app::AppState { aggregator: Arc::new(aggregator) };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    log::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

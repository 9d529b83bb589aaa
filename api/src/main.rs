use clap::Parser;
use http::header::InvalidHeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

mod api;
mod config;
mod store;

#[derive(Parser)]
struct Opt {
    /// Configuration file, infosession.toml in the working directory if not given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the configuration file
    #[arg(long)]
    listen: Option<SocketAddr>,
}

/// Possible API errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// API result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn try_main() -> Result<()> {
    let opts = Opt::parse();
    let mut config = config::Config::new(opts.config.as_deref())?;

    if let Some(listen) = opts.listen {
        config.listen = listen;
    }

    let notices = store::load(&config.notices)?;
    info!("Serving app from {}", config.dist.display());

    let state = api::AppState::new(notices);
    api::run(state, &config).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}

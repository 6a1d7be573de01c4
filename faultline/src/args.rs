use std::path::PathBuf;

use clap::Parser;
use faultline_core::Environment;

/// Faultline error-translating HTTP server
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "HTTP server that turns handler failures into well-formed responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultline.toml", env = "FAULTLINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FAULTLINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Override the deployment environment (development, testing, production)
    #[arg(short, long, env = "FAULTLINE_ENV")]
    pub environment: Option<Environment>,
}

#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use faultline_core::Environment;
use serde::Deserialize;

pub use errors::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level faultline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deployment environment, gates diagnostic detail in error bodies
    #[serde(default)]
    pub environment: Environment,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error response configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

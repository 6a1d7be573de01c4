//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use faultline_config::{Config, ServerConfig};
use faultline_core::Environment;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Set the deployment environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Always answer with structured bodies
    pub fn without_pages(mut self) -> Self {
        self.config.errors.render_pages = false;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use verdict_config::{Config, Environment, ErrorsConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder for a development deployment
    pub fn new() -> Self {
        Self {
            config: Config {
                environment: Some(Environment::Development),
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                },
                errors: ErrorsConfig {
                    include_stack: None,
                    log_failures: false,
                },
                ..Config::default()
            },
        }
    }

    /// Switch to a production deployment
    pub fn production(mut self) -> Self {
        self.config.environment = Some(Environment::Production);
        self
    }

    /// Force stack traces on or off
    pub fn with_include_stack(mut self, include_stack: bool) -> Self {
        self.config.errors.include_stack = Some(include_stack);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

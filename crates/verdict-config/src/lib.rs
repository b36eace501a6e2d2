#![allow(clippy::must_use_candidate)]

mod env;
pub mod environment;
pub mod errors;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use environment::*;
pub use errors::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Verdict configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deployment environment; falls back to `APP_ENV` when unset
    #[serde(default)]
    pub environment: Option<Environment>,
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

impl Config {
    /// Effective environment: the configured value, else the process environment
    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_else(Environment::from_env)
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Verdict error-response demo server
#[derive(Debug, Parser)]
#[command(name = "verdict", about = "Classifies handler failures into JSON error responses")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long, env = "VERDICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "VERDICT_LISTEN")]
    pub listen: Option<SocketAddr>,
}

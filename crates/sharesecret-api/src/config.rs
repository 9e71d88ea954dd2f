//! # Command-Line Configuration
//!
//! Flags with environment fallbacks. The backing file path is mandatory:
//! without it the process refuses to start.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::state::AppConfig;

/// Burn-after-read secret sharing service.
///
/// Accepts a secret, returns its digest, and reveals the secret to the first
/// caller that presents the digest.
#[derive(Parser, Debug, Clone)]
#[command(name = "sharesecret", version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding the stored secrets. Created if missing.
    #[arg(long, env = "DATA_FILE_PATH")]
    pub data_file: PathBuf,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, env = "SHARESECRET_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: IpAddr,

    /// Per-request timeout in seconds.
    #[arg(long, env = "SHARESECRET_REQUEST_TIMEOUT", default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Emit logs as JSON lines.
    #[arg(long, env = "SHARESECRET_JSON_LOGS")]
    pub json_logs: bool,
}

impl Cli {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// HTTP-layer settings derived from the flags.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..AppConfig::default()
        }
    }
}

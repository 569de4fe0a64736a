//! Configuration parsing for the relay server.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Sensible defaults for quick start

use clap::Parser;
use std::path::PathBuf;

/// Relay: a minimal HTTP chat relay with SQLite persistence.
#[derive(Parser, Debug, Clone)]
#[command(name = "relay")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "RELAY_PORT", default_value_t = 9090)]
    pub port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, env = "RELAY_DB_PATH", default_value = "./relay.db")]
    pub db_path: PathBuf,

    /// Path to the static page served at /
    #[arg(long, env = "RELAY_INDEX_PATH", default_value = "./assets/index.html")]
    pub index_path: PathBuf,

    /// Maximum number of messages returned per poll
    #[arg(long, env = "RELAY_PAGE_SIZE", default_value_t = 10)]
    pub page_size: u32,

    /// Size of the SQLite connection pool
    #[arg(long, env = "RELAY_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 9090,
            db_path: PathBuf::from("./relay.db"),
            index_path: PathBuf::from("./assets/index.html"),
            page_size: 10,
            pool_size: 10,
            log_level: "info".into(),
        }
    }
}

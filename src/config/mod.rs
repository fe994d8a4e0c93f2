use clap::Parser;

/// Receipt scoring service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tallyr")]
#[command(about = "In-memory receipt loyalty-points scoring service")]
pub struct Config {
    /// HTTP server listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "TALLYR_LISTEN_ADDR")]
    pub listen_addr: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable graceful shutdown
    #[arg(long, default_value = "true", env = "TALLYR_GRACEFUL_SHUTDOWN")]
    pub graceful_shutdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            graceful_shutdown: true,
        }
    }
}

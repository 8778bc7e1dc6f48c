//! Command-line argument parsing for gateway-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing for connection settings (handled by `gateway_config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for gateway-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --profile, --config-path)
/// 2. Environment variables (e.g., GATEWAY_PROFILE, GATEWAY_BASE_URL)
/// 3. Profile configuration (from config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "gateway-tui",
    about = "Terminal admin console for an LLM API gateway",
    version,
    after_help = "Examples:\n  gateway-tui\n  gateway-tui --profile production\n  gateway-tui --config-path /etc/gateway-tui/config.json\n  gateway-tui --log-dir /var/log/gateway-tui --fresh\n"
)]
pub struct Cli {
    /// Config profile name to load
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh state, ignoring any persisted preferences
    #[arg(long)]
    pub fresh: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "localhost:9090")
    #[arg(long, env = "GATEWAY_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}

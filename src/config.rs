use clap::Parser;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://odd-paper-807c.gnh1201.workers.dev";
pub const DEFAULT_TOKEN: &str = "helloworld";

/// logpeek - query recent access logs and log counts from the log API
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token sent with every request
    #[arg(long, default_value = DEFAULT_TOKEN)]
    pub token: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Number of recent logs to fetch
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Offset into the recent logs
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Code to query; prompts on stdin when omitted
    #[arg(long)]
    pub code: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parse command-line arguments into Config
    pub fn new() -> Self {
        Config::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Map -v occurrences to a tracing level
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

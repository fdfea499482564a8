//! Runtime configuration for the command line tool.
//!
//! Environment variables (a `.env` file is loaded by `main`) give the
//! defaults, command line arguments override them.

use clap::{Parser, ValueEnum};

/// Output format env var, `table`, `csv` or `json`.
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
/// Subnet list file env var.
pub const ENV_FILE: &str = "SUBNET_CALC_FILE";
/// log4rs config file env var.
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// Default log4rs config file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How summary rows are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, coloured table.
    #[default]
    Table,
    Csv,
    Json,
}

/// Print network, broadcast, masks and host pool for IPv4 subnets.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Default)]
#[command(version)]
pub struct Config {
    /// Output format.
    #[arg(long, value_enum, ignore_case = true, env = ENV_FORMAT, default_value = "table")]
    pub format: OutputFormat,

    /// Subnet list file to read, one CIDR per line.
    #[arg(long, env = ENV_FILE)]
    pub file: Option<String>,

    /// CIDRs to summarise, e.g. 192.168.1.10/24.
    #[arg(required_unless_present = "file")]
    pub cidrs: Vec<String>,

    /// Sort and drop repeated networks before printing.
    #[arg(long, default_value_t = false)]
    pub dedup: bool,

    /// log4rs YAML config file.
    #[arg(long, env = ENV_LOG_CONFIG, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: String,
}

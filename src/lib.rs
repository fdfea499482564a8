//! IPv4 subnet calculator.
//!
//! This crate provides exact IPv4 subnet arithmetic:
//! - [`models`] - Address, mask, CIDR, range, network class and subnet types
//! - [`processing`] - De-duplication and summary rows for subnet lists
//! - [`output`] - Terminal, CSV and JSON output
//! - [`input`] - Reading subnet list files
//! - [`config`] - Command line configuration

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;
pub mod text;

use config::{Config, OutputFormat};
use models::Subnet;
use std::error::Error;

pub use error::SubnetError;
pub use input::read_subnet_list;
pub use processing::{check_for_duplicate_subnets, de_duplicate_subnets};

/// Read subnets from a list file, sorted by network then prefix length.
pub fn get_sorted_subnets(path: &str) -> Result<Vec<Subnet>, Box<dyn Error>> {
    let mut subnets = read_subnet_list(path)?;
    subnets.sort_by_key(|s| (s.network(), s.prefix_len()));
    Ok(subnets)
}

/// Collect the subnets named by `config`, list file first, then the
/// command line CIDRs.
///
/// A network given twice is an error unless `config.dedup` is set, in
/// which case repeats are dropped.
pub fn load_subnets(config: &Config) -> Result<Vec<Subnet>, Box<dyn Error>> {
    let mut subnets = match &config.file {
        Some(path) => read_subnet_list(path)?,
        None => vec![],
    };
    for cidr in &config.cidrs {
        let subnet: Subnet = cidr
            .parse()
            .map_err(|e| format!("Error parsing '{cidr}': {e}"))?;
        subnets.push(subnet);
    }
    if config.dedup {
        subnets = de_duplicate_subnets(subnets);
    } else {
        check_for_duplicate_subnets(&subnets)
            .map_err(|e| format!("{e}, use --dedup to drop repeated networks"))?;
    }
    Ok(subnets)
}

/// Load, summarise and print the subnets named by `config`.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let subnets = load_subnets(config)?;
    let rows = processing::summarize_all(&subnets);
    match config.format {
        OutputFormat::Table => output::print_table(&rows),
        OutputFormat::Csv => output::subnet_print(&rows),
        OutputFormat::Json => output::print_json(&rows),
    }
}

//! Reading subnet lists from text files.
//!
//! One CIDR per line. Blank lines and lines starting with `#` are skipped,
//! anything after a `#` on a line is a comment.

use crate::error::{Result, SubnetError};
use crate::models::Subnet;
use std::path::Path;

/// Parse subnets from the contents of a list file.
pub fn parse_subnet_list(text: &str) -> Result<Vec<Subnet>> {
    let mut subnets = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or("").trim();
        if entry.is_empty() {
            continue;
        }
        let subnet: Subnet = entry.parse().map_err(|e| SubnetError::Line {
            line: i + 1,
            source: Box::new(e),
        })?;
        log::trace!("line {}: {subnet}", i + 1);
        subnets.push(subnet);
    }
    Ok(subnets)
}

/// Read and parse a subnet list file.
///
/// # Arguments
/// * `path` - Path to the list file
///
/// # Returns
/// * `Ok(Vec<Subnet>)` - The subnets in file order
/// * `Err` - If the file is missing or a line does not parse
pub fn read_subnet_list(path: &str) -> Result<Vec<Subnet>> {
    if !Path::new(path).exists() {
        return Err(SubnetError::Io {
            path: path.to_string(),
            reason: "file does not exist".to_string(),
        });
    }
    log::info!("Reading subnet list file: {path}");
    let text = std::fs::read_to_string(path).map_err(|e| SubnetError::Io {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let subnets = parse_subnet_list(&text)?;
    log::info!("Got {} subnets from {path}", subnets.len());
    Ok(subnets)
}

//! Error type shared by every parser and constructor in the crate.

use thiserror::Error;

/// Construction-time validation failures.
///
/// Values in this crate either exist with their invariants checked or are
/// never built, so every variant is raised from a constructor or parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Wrong token count, non-numeric token, or octet outside 0-255.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Prefix length outside the bound accepted by the caller.
    #[error("invalid prefix length {value}, expected {min}-{max}")]
    InvalidPrefix { value: u32, min: u8, max: u8 },

    /// Text does not match the `a.b.c.d/n` grammar.
    #[error("invalid CIDR: {0}")]
    InvalidCidr(String),

    /// Malformed `low - high` text, or low above high.
    #[error("invalid network range: {0}")]
    InvalidRange(String),

    /// Malformed MAC address.
    #[error("invalid MAC: {0}")]
    InvalidMac(String),

    /// A subnet list file could not be read.
    #[error("error reading {path}: {reason}")]
    Io { path: String, reason: String },

    /// A line of a subnet list file failed to parse.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<SubnetError>,
    },
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SubnetError>;

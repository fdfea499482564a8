//! A [`NetworkRange`] with a name.

use super::{Address, NetworkRange};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Name of the full, default range of a [`RangeRegistry`](super::RangeRegistry).
pub const PUBLIC_RANGE_NAME: &str = "public";

/// Named address range.
#[derive(Serialize, Eq, PartialEq, Debug, Clone, Hash)]
pub struct NamedRange {
    name: String,
    range: NetworkRange,
}

impl NamedRange {
    pub fn new(name: &str, range: NetworkRange) -> NamedRange {
        NamedRange {
            name: name.to_string(),
            range,
        }
    }

    /// Parse the range part from `a.b.c.d - a.b.c.d`.
    pub fn parse(name: &str, range: &str) -> Result<NamedRange> {
        Ok(NamedRange::new(name, range.parse()?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &NetworkRange {
        &self.range
    }

    /// True for the registry default range.
    pub fn is_public(&self) -> bool {
        self.name == PUBLIC_RANGE_NAME
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.range.contains(addr)
    }
}

impl fmt::Display for NamedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.range)
    }
}

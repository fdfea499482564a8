//! Registry of named ranges under one default `public` range.

use super::named_range::{NamedRange, PUBLIC_RANGE_NAME};
use super::{Address, NetworkRange};
use crate::error::Result;
use std::fmt;

/// Holds a default `public` range and any number of named sub-ranges.
///
/// Sub-range names are unique. Sub-ranges are not checked to lie inside the
/// default range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRegistry {
    ranges: Vec<NamedRange>,
}

impl RangeRegistry {
    /// Create a registry whose default range is parsed from `a.b.c.d - a.b.c.d`.
    pub fn new(public_range: &str) -> Result<RangeRegistry> {
        let range: NetworkRange = public_range.parse()?;
        Ok(RangeRegistry::from_range(range))
    }

    /// Create a registry from an already built default range.
    pub fn from_range(range: NetworkRange) -> RangeRegistry {
        RangeRegistry {
            ranges: vec![NamedRange::new(PUBLIC_RANGE_NAME, range)],
        }
    }

    /// The `public` range given at construction.
    pub fn default_range(&self) -> &NamedRange {
        // ranges[0] is always the public range, set in from_range()
        &self.ranges[0]
    }

    /// True if a range with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&NamedRange> {
        self.ranges.iter().find(|r| r.name() == name)
    }

    /// Store a copy of `range`. Returns false, leaving the registry as it
    /// was, if the name is already taken.
    pub fn add(&mut self, range: &NamedRange) -> bool {
        if self.has(range.name()) {
            log::debug!("range name '{}' already registered", range.name());
            return false;
        }
        self.ranges.push(range.clone());
        true
    }

    /// Snapshot of every registered range, default first.
    pub fn all(&self) -> Vec<NamedRange> {
        self.ranges.clone()
    }

    /// Name of the first sub-range containing `addr`, falling back to the
    /// default range name.
    pub fn name_of(&self, addr: &Address) -> Option<&str> {
        self.ranges
            .iter()
            .skip(1)
            .find(|r| r.contains(addr))
            .or_else(|| Some(self.default_range()).filter(|r| r.contains(addr)))
            .map(NamedRange::name)
    }
}

impl fmt::Display for RangeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RangeRegistry ({} ranges):", self.ranges.len())?;
        for range in &self.ranges {
            writeln!(f, "  - {range}")?;
        }
        Ok(())
    }
}

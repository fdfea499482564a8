//! Inclusive address range, `low - high`.
//!
//! Containment is checked octet by octet: each octet of a candidate must lie
//! between the matching octets of `low` and `high`. For ranges that are not
//! CIDR aligned this is narrower than comparing 32-bit values, e.g.
//! `10.0.5.0 - 10.1.200.255` does not contain `10.0.250.1`.

use super::Address;
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Values that can be tested for membership of a [`NetworkRange`].
pub trait RangeMember {
    /// True if `self` lies inside `range`.
    fn within(&self, range: &NetworkRange) -> bool;
}

/// Inclusive range of addresses.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetworkRange {
    low: Address,
    high: Address,
}

impl NetworkRange {
    /// Create a range, failing if any octet of `low` exceeds the matching
    /// octet of `high` or if `low` orders after `high`.
    pub fn new(low: Address, high: Address) -> Result<NetworkRange> {
        let (lo, hi) = (low.octets(), high.octets());
        if lo.iter().zip(hi.iter()).any(|(l, h)| l > h) || high < low {
            log::debug!("rejected range {low} - {high}");
            return Err(SubnetError::InvalidRange(format!("{low} - {high}")));
        }
        Ok(NetworkRange { low, high })
    }

    /// First address of the range, the network address for a subnet.
    pub fn low(&self) -> Address {
        self.low
    }

    /// Last address of the range, the broadcast address for a subnet.
    pub fn high(&self) -> Address {
        self.high
    }

    /// Number of addresses in the range, both ends included.
    pub fn size(&self) -> u64 {
        u64::from(self.high.value()) - u64::from(self.low.value()) + 1
    }

    /// True if `value` is in the band of octet `ndx`.
    pub fn valid_octet(&self, value: u8, ndx: usize) -> bool {
        match (self.low.octets().get(ndx), self.high.octets().get(ndx)) {
            (Some(lo), Some(hi)) => (*lo..=*hi).contains(&value),
            _ => false,
        }
    }

    /// True if an address or a whole range lies in this range.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::{Address, NetworkRange};
    /// let range: NetworkRange = "10.0.0.0 - 10.255.255.255".parse().unwrap();
    /// assert!(range.contains(&Address::new(10, 1, 2, 3)));
    /// assert!(range.contains(&"10.1.0.0 - 10.1.255.255".parse::<NetworkRange>().unwrap()));
    /// ```
    pub fn contains<T: RangeMember + ?Sized>(&self, value: &T) -> bool {
        value.within(self)
    }
}

impl RangeMember for Address {
    fn within(&self, range: &NetworkRange) -> bool {
        self.octets()
            .iter()
            .enumerate()
            .all(|(ndx, octet)| range.valid_octet(*octet, ndx))
    }
}

impl RangeMember for NetworkRange {
    fn within(&self, range: &NetworkRange) -> bool {
        range.contains(&self.low) && range.contains(&self.high)
    }
}

impl FromStr for NetworkRange {
    type Err = SubnetError;

    /// Parse `a.b.c.d - a.b.c.d`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').map(str::trim).collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(SubnetError::InvalidRange(s.to_string()));
        }
        let low: Address = parts[0].parse()?;
        let high: Address = parts[1].parse()?;
        NetworkRange::new(low, high)
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

impl Serialize for NetworkRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkRange::from_str(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> NetworkRange {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        let r = range("10.0.0.0 - 10.0.0.255");
        assert_eq!(r.low(), Address::new(10, 0, 0, 0));
        assert_eq!(r.high(), Address::new(10, 0, 0, 255));
        assert_eq!(range("10.0.0.0-10.0.0.255"), r);
        assert_eq!(range("  10.0.0.0   -10.0.0.255 "), r);
        assert_eq!(r.to_string(), "10.0.0.0 - 10.0.0.255");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "10.0.0.5 - 10.0.0.2".parse::<NetworkRange>(),
            Err(SubnetError::InvalidRange(_))
        ));
        assert!(matches!(
            "10.0.0.5".parse::<NetworkRange>(),
            Err(SubnetError::InvalidRange(_))
        ));
        assert!(matches!(
            "10.0.0.1 - 10.0.0.2 - 10.0.0.3".parse::<NetworkRange>(),
            Err(SubnetError::InvalidRange(_))
        ));
        // missing side
        assert!(matches!(
            "10.0.0.1 -".parse::<NetworkRange>(),
            Err(SubnetError::InvalidRange(_))
        ));
        assert!(matches!(
            "- 10.0.0.1".parse::<NetworkRange>(),
            Err(SubnetError::InvalidRange(_))
        ));
        assert!(matches!(
            "10.0.0.1 - 10.0.0".parse::<NetworkRange>(),
            Err(SubnetError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_octet_wise_check() {
        // numerically ordered, but octet 3 of low exceeds octet 3 of high
        assert!(NetworkRange::new(Address::new(10, 0, 0, 200), Address::new(10, 0, 1, 5)).is_err());
        assert!(NetworkRange::new(Address::new(10, 0, 0, 1), Address::new(10, 0, 1, 5)).is_ok());
    }

    #[test]
    fn test_size() {
        assert_eq!(range("192.168.1.0 - 192.168.1.255").size(), 256);
        assert_eq!(range("10.0.0.7 - 10.0.0.7").size(), 1);
        assert_eq!(range("0.0.0.0 - 255.255.255.255").size(), 1u64 << 32);
    }

    #[test]
    fn test_contains_address() {
        let r = range("172.16.0.0 - 172.31.255.255");
        assert!(r.contains(&r.low()));
        assert!(r.contains(&r.high()));
        assert!(r.contains(&Address::new(172, 20, 1, 1)));
        assert!(!r.contains(&Address::new(172, 32, 0, 0)));
        assert!(!r.contains(&Address::new(172, 15, 255, 255)));
    }

    #[test]
    fn test_contains_is_octet_banded() {
        let r = range("10.0.5.0 - 10.1.200.255");
        let inside_numerically = Address::new(10, 0, 250, 1);
        assert!(inside_numerically.value() > r.low().value());
        assert!(inside_numerically.value() < r.high().value());
        assert!(!r.contains(&inside_numerically));
        assert!(r.contains(&Address::new(10, 1, 100, 1)));
    }

    #[test]
    fn test_contains_range() {
        let r = range("192.168.0.0 - 192.168.255.255");
        assert!(r.contains(&range("192.168.1.0 - 192.168.1.255")));
        assert!(r.contains(&r));
        assert!(!r.contains(&range("192.167.0.0 - 192.168.1.255")));
    }

    #[test]
    fn test_valid_octet() {
        let r = range("10.0.0.0 - 10.255.255.255");
        assert!(r.valid_octet(10, 0));
        assert!(!r.valid_octet(11, 0));
        assert!(r.valid_octet(0, 3));
        assert!(!r.valid_octet(0, 4));
    }

    #[test]
    fn test_equals() {
        assert_eq!(range("1.0.0.0 - 1.0.0.9"), range("1.0.0.0-1.0.0.9"));
        assert_ne!(range("1.0.0.0 - 1.0.0.9"), range("1.0.0.0 - 1.0.0.8"));
    }
}

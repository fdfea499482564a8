//! CIDR notation (`a.b.c.d/n`) parsing.
//!
//! A [`Cidr`] keeps the address it was parsed from together with the subnet
//! mask and host (wildcard) mask derived from the prefix length.

use super::{Address, SubnetMask};
use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(
        r"^\s*(?P<ip>[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})\s*/(?P<len>[0-9]{1,2})\s*$"
    )
    .expect("Invalid Regex?");
}

/// Address plus prefix length, with derived masks.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    address: Address,
    prefix_len: u8,
    subnet_mask: Address,
    host_mask: Address,
}

impl Cidr {
    /// Smallest usable prefix length.
    pub const MIN: u8 = 1;
    /// Largest usable prefix length, /31 and /32 have no room for hosts.
    pub const MAX: u8 = 30;

    /// Create a [`Cidr`] from an address and a prefix length in 1-30.
    pub fn new(address: Address, prefix_len: u8) -> Result<Cidr> {
        if !(Cidr::MIN..=Cidr::MAX).contains(&prefix_len) {
            log::debug!("rejected prefix /{prefix_len} for {address}");
            return Err(SubnetError::InvalidPrefix {
                value: u32::from(prefix_len),
                min: Cidr::MIN,
                max: Cidr::MAX,
            });
        }
        let subnet_mask = SubnetMask::from_prefix_len(prefix_len)?;
        Ok(Cidr {
            address,
            prefix_len,
            subnet_mask,
            host_mask: subnet_mask.bitwise_not(),
        })
    }

    /// The address part, as written.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The prefix length, 1-30.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Leading ones mask for the prefix length.
    pub fn subnet_mask(&self) -> Address {
        self.subnet_mask
    }

    /// Complement of the subnet mask, also known as the wildcard mask.
    pub fn host_mask(&self) -> Address {
        self.host_mask
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    /// Parse `a.b.c.d/n`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self> {
        let caps = CIDR_RE
            .captures(s)
            .ok_or_else(|| SubnetError::InvalidCidr(s.to_string()))?;
        let address: Address = caps["ip"].parse()?;
        let prefix_len: u8 = caps["len"]
            .parse()
            .map_err(|_| SubnetError::InvalidCidr(s.to_string()))?;
        Cidr::new(address, prefix_len)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR format: {e}")))
    }
}

//! Fixed width IPv4 address with octet-wise bit algebra.
//!
//! Provides [`Address`] and the [`AddressOffset`] used to step from a
//! network/broadcast boundary to the first/last host.

use super::network_class::NetClassType;
use crate::error::{Result, SubnetError};
use crate::text::{binary, chunk_string};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// Number of octets in an IPv4 address.
pub const OCTET_COUNT: usize = 4;

/// Boundary an address is stepped away from by [`Address::offset`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressOffset {
    /// Step up from the network address to the first host.
    NetworkAddress,
    /// Step down from the broadcast address to the last host.
    BroadcastAddress,
}

/// IPv4 address made of four octets, octet 0 most significant.
///
/// Ordering is lexicographic over the octets, which is the same as the
/// ordering of [`Address::value`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address {
    octets: [u8; OCTET_COUNT],
}

impl Address {
    /// `0.0.0.0`
    pub const UNSPECIFIED: Address = Address::new(0, 0, 0, 0);
    /// `127.0.0.1`
    pub const LOCALHOST: Address = Address::new(127, 0, 0, 1);
    /// `255.255.255.255`
    pub const BROADCAST: Address = Address::new(255, 255, 255, 255);

    /// Creates an address from four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Address {
        Address {
            octets: [a, b, c, d],
        }
    }

    /// Creates an address from a list of integers, checking there are
    /// exactly four and each one is 0-255.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::Address;
    /// let addr = Address::from_octets(&[192, 168, 1, 10]).unwrap();
    /// assert_eq!(addr.to_string(), "192.168.1.10");
    /// assert!(Address::from_octets(&[192, 168, 1, 256]).is_err());
    /// ```
    pub fn from_octets(values: &[i64]) -> Result<Address> {
        if values.len() != OCTET_COUNT {
            return Err(SubnetError::InvalidAddress(format!(
                "expected {OCTET_COUNT} octets, got {}",
                values.len()
            )));
        }
        let mut octets = [0u8; OCTET_COUNT];
        for (ndx, value) in values.iter().enumerate() {
            octets[ndx] = u8::try_from(*value).map_err(|_| {
                SubnetError::InvalidAddress(format!("octet {ndx} out of range: {value}"))
            })?;
        }
        Ok(Address { octets })
    }

    /// Returns a copy of the four octets.
    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// Unsigned 32-bit value, octet 0 in bits 31-24.
    pub fn value(&self) -> u32 {
        let [a, b, c, d] = self.octets;
        let wide = (u64::from(a) << 24) | (u64::from(b) << 16) | (u64::from(c) << 8) | u64::from(d);
        wide as u32
    }

    /// The 32-bit value as a string of 0s and 1s.
    pub fn binary(&self) -> String {
        binary(u64::from(self.value()), 32)
    }

    /// The binary string chunked per octet, `xxxxxxxx.xxxxxxxx.xxxxxxxx.xxxxxxxx`.
    pub fn binary_dotted(&self) -> String {
        chunk_string(&self.binary(), 8).join(".")
    }

    /// Octet-wise NOT.
    pub fn bitwise_not(&self) -> Address {
        self.map(|o| !o)
    }

    /// Octet-wise AND with `mask`.
    pub fn and(&self, mask: &Address) -> Address {
        self.zip(mask, |a, b| a & b)
    }

    /// Octet-wise OR with `mask`.
    pub fn or(&self, mask: &Address) -> Address {
        self.zip(mask, |a, b| a | b)
    }

    /// Octet-wise XOR with `mask`.
    pub fn xor(&self, mask: &Address) -> Address {
        self.zip(mask, |a, b| a ^ b)
    }

    /// Steps the last octet one away from a boundary address.
    ///
    /// Only octet 3 changes, there is no carry into octet 2. Stepping past
    /// 0 or 255 fails with [`SubnetError::InvalidAddress`].
    pub fn offset(&self, kind: AddressOffset) -> Result<Address> {
        let last = self.octets[OCTET_COUNT - 1];
        let stepped = match kind {
            AddressOffset::NetworkAddress => last.checked_add(1),
            AddressOffset::BroadcastAddress => last.checked_sub(1),
        }
        .ok_or_else(|| {
            SubnetError::InvalidAddress(format!("{kind:?} offset out of range for {self}"))
        })?;
        let mut octets = self.octets;
        octets[OCTET_COUNT - 1] = stepped;
        Ok(Address { octets })
    }

    /// Legacy network class of this address.
    pub fn class_type(&self) -> NetClassType {
        NetClassType::classify(self)
    }

    /// True for `127.0.0.1`.
    pub fn is_localhost(&self) -> bool {
        *self == Address::LOCALHOST
    }

    fn map(&self, f: impl Fn(u8) -> u8) -> Address {
        let mut octets = self.octets;
        octets.iter_mut().for_each(|o| *o = f(*o));
        Address { octets }
    }

    fn zip(&self, other: &Address, f: impl Fn(u8, u8) -> u8) -> Address {
        let mut octets = self.octets;
        for (ndx, o) in octets.iter_mut().enumerate() {
            *o = f(*o, other.octets[ndx]);
        }
        Address { octets }
    }
}

impl FromStr for Address {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .trim()
            .split('.')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(SubnetError::InvalidAddress(s.to_string()));
                }
                part.parse::<i64>()
                    .map_err(|_| SubnetError::InvalidAddress(s.to_string()))
            })
            .collect::<Result<Vec<i64>>>()?;
        Address::from_octets(&values).map_err(|e| {
            log::debug!("rejected address '{s}': {e}");
            SubnetError::InvalidAddress(s.to_string())
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<[u8; OCTET_COUNT]> for Address {
    fn from(octets: [u8; OCTET_COUNT]) -> Address {
        Address { octets }
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Address {
        Address {
            octets: value.to_be_bytes(),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address {
            octets: addr.octets(),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Ipv4Addr {
        Ipv4Addr::from(addr.octets)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = SubnetError;

    fn try_from(bytes: &[u8]) -> Result<Address> {
        let octets: [u8; OCTET_COUNT] = bytes.try_into().map_err(|_| {
            SubnetError::InvalidAddress(format!(
                "expected {OCTET_COUNT} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Address { octets })
    }
}

impl Not for Address {
    type Output = Address;

    fn not(self) -> Address {
        self.bitwise_not()
    }
}

impl BitAnd for Address {
    type Output = Address;

    fn bitand(self, rhs: Address) -> Address {
        self.and(&rhs)
    }
}

impl BitOr for Address {
    type Output = Address;

    fn bitor(self, rhs: Address) -> Address {
        self.or(&rhs)
    }
}

impl BitXor for Address {
    type Output = Address;

    fn bitxor(self, rhs: Address) -> Address {
        self.xor(&rhs)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

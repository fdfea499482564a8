//! Ethernet MAC address.

use crate::error::SubnetError;
use crate::text::chunk_string;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref SEPARATED_RE: Regex =
        Regex::new(r"^(?:[0-9A-Fa-f]{1,2}[.:-]){5}[0-9A-Fa-f]{1,2}$").expect("Invalid Regex?");
    static ref CONTIGUOUS_RE: Regex = Regex::new(r"^[0-9A-Fa-f]{12}$").expect("Invalid Regex?");
}

/// Ethernet MAC address.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// Creates a MAC address from 6 octets.
    #[allow(clippy::many_single_char_names)]
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddr([a, b, c, d, e, f])
    }

    /// Returns the six bytes the MAC address consists of.
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// The 48-bit unsigned value.
    pub fn value(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> MacAddr {
        MacAddr(octets)
    }
}

impl FromStr for MacAddr {
    type Err = SubnetError;

    /// Accepts `XX:XX:XX:XX:XX:XX` with `.`, `:` or `-` separators, or 12
    /// contiguous hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<String> = if SEPARATED_RE.is_match(s) {
            s.split(|c| c == ':' || c == '-' || c == '.')
                .map(str::to_string)
                .collect()
        } else if CONTIGUOUS_RE.is_match(s) {
            chunk_string(s, 2)
        } else {
            return Err(SubnetError::InvalidMac(s.to_owned()));
        };

        let u8s = parts
            .iter()
            .map(|p| u8::from_str_radix(p, 16))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| SubnetError::InvalidMac(s.to_owned()))?;

        let octets: [u8; 6] = u8s
            .try_into()
            .map_err(|_| SubnetError::InvalidMac(s.to_owned()))?;
        Ok(octets.into())
    }
}

impl Serialize for MacAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

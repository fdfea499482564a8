//! Subnet: a CIDR with its network, broadcast and DHCP pool.

use super::{Address, Cidr, DhcpPool, NetClassType, NetworkRange};
use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loopback block for localhost.
pub const LOOPBACK_CIDR: &str = "127.0.0.0/8";
/// Link-local block used for self assigned addresses (APIPA).
pub const LINK_LOCAL_CIDR: &str = "169.254.0.0/16";
/// Group addressing for multicast.
pub const MULTICAST_CIDR: &str = "224.0.0.0/4";
/// Reserved for future use.
pub const RESERVED_CIDR: &str = "240.0.0.0/4";
/// Shared address space for carrier-grade NAT.
pub const CGNAT_CIDR: &str = "100.64.0.0/10";
/// TEST-NET-1, documentation and examples.
pub const DOCS_01_CIDR: &str = "192.0.2.0/24";
/// TEST-NET-2, documentation and examples.
pub const DOCS_02_CIDR: &str = "198.51.100.0/24";
/// TEST-NET-3, documentation and examples.
pub const DOCS_03_CIDR: &str = "203.0.113.0/24";
/// Network interconnect benchmarking.
pub const BENCHMARKING_CIDR: &str = "198.18.0.0/15";

const RESERVED_TABLE: [(&str, &str); 9] = [
    ("loopback", LOOPBACK_CIDR),
    ("link-local", LINK_LOCAL_CIDR),
    ("multicast", MULTICAST_CIDR),
    ("reserved", RESERVED_CIDR),
    ("cgnat", CGNAT_CIDR),
    ("docs-01", DOCS_01_CIDR),
    ("docs-02", DOCS_02_CIDR),
    ("docs-03", DOCS_03_CIDR),
    ("benchmarking", BENCHMARKING_CIDR),
];

/// A well known reserved block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReservedBlock {
    pub name: &'static str,
    pub cidr: &'static str,
    pub subnet: Subnet,
}

lazy_static! {
    static ref RESERVED_SUBNETS: Vec<ReservedBlock> = RESERVED_TABLE
        .iter()
        .map(|&(name, cidr)| ReservedBlock {
            name,
            cidr,
            subnet: cidr.parse().expect("Invalid reserved CIDR literal?"),
        })
        .collect();
}

fn reserved_subnet(cidr: &str) -> Subnet {
    RESERVED_SUBNETS
        .iter()
        .find(|block| block.cidr == cidr)
        .map(|block| block.subnet)
        .unwrap_or_else(|| panic!("{cidr} missing from reserved table"))
}

/// Broadcast domain described by a CIDR.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::Subnet;
/// let subnet: Subnet = "192.168.1.10/24".parse().unwrap();
/// assert_eq!(subnet.network().to_string(), "192.168.1.0");
/// assert_eq!(subnet.broadcast().to_string(), "192.168.1.255");
/// assert_eq!(subnet.host_count(), 254);
/// ```
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    cidr: Cidr,
    network: Address,
    broadcast: Address,
    dhcp: DhcpPool,
}

impl Subnet {
    /// Derive network and broadcast addresses and the DHCP pool from `cidr`.
    pub fn new(cidr: Cidr) -> Result<Subnet> {
        let network = cidr.address().and(&cidr.subnet_mask());
        let broadcast = network.or(&cidr.host_mask());
        Ok(Subnet {
            cidr,
            network,
            broadcast,
            dhcp: DhcpPool::new(network, broadcast)?,
        })
    }

    pub fn cidr(&self) -> &Cidr {
        &self.cidr
    }

    /// The address the subnet was written with.
    pub fn ip(&self) -> Address {
        self.cidr.address()
    }

    pub fn prefix_len(&self) -> u8 {
        self.cidr.prefix_len()
    }

    pub fn subnet_mask(&self) -> Address {
        self.cidr.subnet_mask()
    }

    pub fn host_mask(&self) -> Address {
        self.cidr.host_mask()
    }

    /// All host bits zero.
    pub fn network(&self) -> Address {
        self.network
    }

    /// All host bits one.
    pub fn broadcast(&self) -> Address {
        self.broadcast
    }

    pub fn dhcp(&self) -> &DhcpPool {
        &self.dhcp
    }

    /// Network to broadcast range.
    pub fn range(&self) -> &NetworkRange {
        self.dhcp.range()
    }

    /// Usable hosts, network and broadcast excluded.
    pub fn host_count(&self) -> u64 {
        self.dhcp.hosts()
    }

    /// Network class of the written address.
    pub fn class_type(&self) -> NetClassType {
        self.ip().class_type()
    }

    /// True if `addr` is between network and broadcast address.
    pub fn contains(&self, addr: &Address) -> bool {
        self.range().contains(addr)
    }

    /// First reserved block that fully contains this subnet.
    pub fn reserved_block(&self) -> Option<&'static ReservedBlock> {
        RESERVED_SUBNETS
            .iter()
            .find(|block| block.subnet.range().contains(self.range()))
    }

    /// Every reserved block, in a fixed order.
    pub fn reserved_subnets() -> &'static [ReservedBlock] {
        &RESERVED_SUBNETS
    }

    /// `127.0.0.0/8`
    pub fn loopback() -> Subnet {
        reserved_subnet(LOOPBACK_CIDR)
    }

    /// `169.254.0.0/16`
    pub fn link_local() -> Subnet {
        reserved_subnet(LINK_LOCAL_CIDR)
    }

    /// `224.0.0.0/4`
    pub fn multicast() -> Subnet {
        reserved_subnet(MULTICAST_CIDR)
    }

    /// `240.0.0.0/4`, commonly treated as invalid by hosts and routers.
    pub fn reserved() -> Subnet {
        reserved_subnet(RESERVED_CIDR)
    }

    /// `100.64.0.0/10`, not the same as RFC1918 private space.
    pub fn cgnat() -> Subnet {
        reserved_subnet(CGNAT_CIDR)
    }

    /// `192.0.2.0/24`
    pub fn docs01() -> Subnet {
        reserved_subnet(DOCS_01_CIDR)
    }

    /// `198.51.100.0/24`
    pub fn docs02() -> Subnet {
        reserved_subnet(DOCS_02_CIDR)
    }

    /// `203.0.113.0/24`
    pub fn docs03() -> Subnet {
        reserved_subnet(DOCS_03_CIDR)
    }

    /// `198.18.0.0/15`
    pub fn benchmarking() -> Subnet {
        reserved_subnet(BENCHMARKING_CIDR)
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Subnet::new(s.parse()?)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cidr)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_str(&s).map_err(|e| de::Error::custom(format!("invalid subnet: {e}")))
    }
}

//! Domain models for IPv4 subnet calculations.
//!
//! This module contains the core data structures:
//! - [`Address`] - four octet IPv4 address with bit algebra
//! - [`SubnetMask`] - masks from prefix lengths
//! - [`Cidr`] - `a.b.c.d/n` with derived masks
//! - [`NetworkRange`], [`NamedRange`] and [`RangeRegistry`] - address ranges
//! - [`NetworkClass`] - legacy class A-E lookup
//! - [`Subnet`] and [`DhcpPool`] - network, broadcast and host pool
//! - [`MacAddr`] - Ethernet MAC address

mod address;
mod cidr;
mod dhcp;
mod mac;
mod mask;
mod named_range;
mod network_class;
mod range;
mod registry;
mod subnet;

// Re-export public types
pub use address::{Address, AddressOffset, OCTET_COUNT};
pub use cidr::Cidr;
pub use dhcp::DhcpPool;
pub use mac::MacAddr;
pub use mask::{get_cidr_mask, SubnetMask, MAX_LENGTH, MIN_LENGTH};
pub use named_range::{NamedRange, PUBLIC_RANGE_NAME};
pub use network_class::{NetClassType, NetworkClass};
pub use range::{NetworkRange, RangeMember};
pub use registry::RangeRegistry;
pub use subnet::{
    ReservedBlock, Subnet, BENCHMARKING_CIDR, CGNAT_CIDR, DOCS_01_CIDR, DOCS_02_CIDR,
    DOCS_03_CIDR, LINK_LOCAL_CIDR, LOOPBACK_CIDR, MULTICAST_CIDR, RESERVED_CIDR,
};

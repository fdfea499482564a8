//! DHCP pool of a subnet.

use super::{Address, AddressOffset, NetworkRange};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Host allocation range spanning network to broadcast address.
///
/// The range itself keeps both boundary addresses; [`DhcpPool::hosts`]
/// leaves them out of the count.
#[derive(Serialize, Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct DhcpPool {
    range: NetworkRange,
    first_host: Address,
    last_host: Address,
}

impl DhcpPool {
    /// Create the pool for a network and broadcast address pair.
    ///
    /// Fails if the range is invalid or too small to step inwards from both
    /// ends.
    pub fn new(network: Address, broadcast: Address) -> Result<DhcpPool> {
        let range = NetworkRange::new(network, broadcast)?;
        Ok(DhcpPool {
            range,
            first_host: network.offset(AddressOffset::NetworkAddress)?,
            last_host: broadcast.offset(AddressOffset::BroadcastAddress)?,
        })
    }

    /// Network to broadcast, both included.
    pub fn range(&self) -> &NetworkRange {
        &self.range
    }

    /// Addresses that can be handed out, range size minus 2.
    pub fn hosts(&self) -> u64 {
        self.range.size() - 2
    }

    pub fn first_host(&self) -> Address {
        self.first_host
    }

    pub fn last_host(&self) -> Address {
        self.last_host
    }

    /// `first - last` host addresses.
    pub fn pool_text(&self) -> String {
        format!("{} - {}", self.first_host, self.last_host)
    }
}

impl fmt::Display for DhcpPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} hosts)", self.pool_text(), self.hosts())
    }
}

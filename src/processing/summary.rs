//! Summary rows describing each subnet.

use crate::models::{NetworkClass, Subnet};
use serde::Serialize;

/// Represents a row of subnet data for output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummaryRow {
    /// Row index, starting at 1.
    pub j: usize,
    /// Subnet CIDR notation, as written.
    pub cidr: String,
    /// Network address.
    pub network: String,
    /// Broadcast address.
    pub broadcast: String,
    /// Subnet mask.
    pub subnet_mask: String,
    /// Host (wildcard) mask.
    pub host_mask: String,
    /// First to last allocatable host.
    pub dhcp_range: String,
    /// Number of allocatable hosts.
    pub hosts: u64,
    /// Legacy network class.
    pub class: String,
    /// Named range of the class registry holding the address.
    pub range_name: String,
    /// Reserved block holding the subnet.
    pub reserved: String,
}

/// Build the summary row for one subnet.
///
/// # Arguments
/// * `s` - The subnet to describe
/// * `i` - The 0 based index of this subnet
pub fn summarize(s: &Subnet, i: usize) -> SubnetSummaryRow {
    let class = NetworkClass::of(&s.ip());
    let range_name = class.ranges().name_of(&s.ip()).unwrap_or("None");
    let reserved = s.reserved_block().map(|b| b.name).unwrap_or("None");

    SubnetSummaryRow {
        j: i + 1,
        cidr: s.to_string(),
        network: s.network().to_string(),
        broadcast: s.broadcast().to_string(),
        subnet_mask: s.subnet_mask().to_string(),
        host_mask: s.host_mask().to_string(),
        dhcp_range: s.dhcp().pool_text(),
        hosts: s.host_count(),
        class: class.class_type().to_string(),
        range_name: range_name.to_string(),
        reserved: reserved.to_string(),
    }
}

/// Build summary rows for a list of subnets, keeping their order.
pub fn summarize_all(subnets: &[Subnet]) -> Vec<SubnetSummaryRow> {
    log::info!("#Start summarize_all() subnet count = {}", subnets.len());
    subnets
        .iter()
        .enumerate()
        .map(|(i, s)| summarize(s, i))
        .collect()
}

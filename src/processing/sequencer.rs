//! Subnet sequencing: walk consecutive same-size networks from a start block.

use serde::Serialize;

use crate::models::Network;

/// Placeholder for the host columns of blocks with no usable host range
/// (/31 and /32).
const NOT_AVAILABLE: &str = "N/A";

/// One row of the subnet listing, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetRow {
    /// The block in CIDR notation, e.g. `192.168.1.0/26`.
    pub cidr: String,
    /// First usable host, or `"N/A"` when the prefix is 31 or 32.
    pub first_host: String,
    /// Last usable host, or `"N/A"` when the prefix is 31 or 32.
    pub last_host: String,
    /// Broadcast address of the block.
    pub broadcast: String,
}

impl SubnetRow {
    fn from_network(network: &Network) -> SubnetRow {
        let fmt_host = |host: Option<std::net::Ipv4Addr>| match host {
            Some(addr) => addr.to_string(),
            None => NOT_AVAILABLE.to_string(),
        };
        SubnetRow {
            cidr: network.to_string(),
            first_host: fmt_host(network.first_host()),
            last_host: fmt_host(network.last_host()),
            broadcast: network.broadcast().to_string(),
        }
    }
}

/// List up to `count` consecutive, equally-sized networks starting at
/// `start`, one [`SubnetRow`] per block.
///
/// Stepping past 255.255.255.255 truncates the listing rather than
/// wrapping or erroring, so fewer than `count` rows can come back near
/// the top of the address space.
pub fn sequence_subnets(start: Network, count: usize) -> Vec<SubnetRow> {
    let mut rows = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        rows.push(SubnetRow::from_network(&current));
        match current.next_adjacent() {
            Some(next) => current = next,
            None => break,
        }
    }
    rows
}

// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

//! IPv4 subnetting calculator.
//!
//! Given a base address and a target (explicit prefix, host count, or
//! subnet count), derives the network prefix, the block's key addresses,
//! and a listing of consecutive same-size subnets.

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use error::CalcError;
use models::{Network, SubnetRequest};
use processing::{build_network, resolve_prefix, sequence_subnets, SubnetRow};

/// A completed calculation: the canonical network plus the subnet listing.
#[derive(Debug, Clone)]
pub struct Calculation {
    /// The resolved, normalized network.
    pub network: Network,
    /// Consecutive same-size subnets starting at `network`; may hold fewer
    /// rows than requested when the sequence hits the top of the space.
    pub rows: Vec<SubnetRow>,
}

/// Run one calculation end to end: resolve the prefix from the request,
/// build the canonical network from the address text, then list
/// `list_count` consecutive subnets.
///
/// Pure and synchronous; nothing persists between invocations.
///
/// # Examples
/// ```
/// use subnet_calculator::{models::SubnetRequest, run_calculation};
///
/// let calc = run_calculation("192.168.1.10", SubnetRequest::ExplicitPrefix(24), 3).unwrap();
/// assert_eq!(calc.network.to_string(), "192.168.1.0/24");
/// assert_eq!(calc.rows.len(), 3);
/// ```
pub fn run_calculation(
    address_text: &str,
    request: SubnetRequest,
    list_count: usize,
) -> Result<Calculation, CalcError> {
    let prefix = resolve_prefix(request)?;
    let network = build_network(address_text, prefix)?;
    let rows = sequence_subnets(network, list_count);
    Ok(Calculation { network, rows })
}

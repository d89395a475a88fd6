//! Prefix resolution: turn a [`SubnetRequest`] into a target prefix length.

use crate::error::PrefixError;
use crate::models::{SubnetRequest, MAX_LENGTH};

/// Host bits below which the subtract-2 usable-host convention breaks down;
/// the narrowest block handed out for a host-count request is a /30.
const MIN_HOST_BITS: u32 = 2;

/// Resolve a [`SubnetRequest`] to a prefix length in 0-32.
///
/// - `ExplicitPrefix` is a validated pass-through (1-32).
/// - `ByHostCount(n)` finds the minimum host bits `H` with
///   `2^H - 2 >= n`, i.e. `ceil(log2(n + 2))`, and returns `32 - H`.
/// - `BySubnetCount` borrows `ceil(log2(count))` bits from the origin
///   prefix's host portion.
///
/// # Examples
/// ```
/// use subnet_calculator::models::SubnetRequest;
/// use subnet_calculator::processing::resolve_prefix;
/// assert_eq!(resolve_prefix(SubnetRequest::ByHostCount(50)), Ok(26));
/// ```
pub fn resolve_prefix(request: SubnetRequest) -> Result<u8, PrefixError> {
    match request {
        SubnetRequest::ExplicitPrefix(prefix) => {
            if prefix == 0 || prefix > MAX_LENGTH {
                return Err(PrefixError::PrefixOutOfRange(prefix));
            }
            Ok(prefix)
        }
        SubnetRequest::ByHostCount(hosts) => {
            // Rounding down here would under-provision, so always ceil.
            let needed_bits = hosts
                .checked_add(2)
                .map(ceil_log2)
                .ok_or(PrefixError::HostCountTooLarge(hosts))?
                .max(MIN_HOST_BITS);
            if needed_bits > MAX_LENGTH as u32 {
                return Err(PrefixError::HostCountTooLarge(hosts));
            }
            Ok(MAX_LENGTH - needed_bits as u8)
        }
        SubnetRequest::BySubnetCount {
            origin_prefix,
            count,
        } => {
            if origin_prefix == 0 || origin_prefix >= MAX_LENGTH {
                return Err(PrefixError::PrefixOutOfRange(origin_prefix));
            }
            let borrowed_bits = ceil_log2(count);
            let target = origin_prefix as u32 + borrowed_bits;
            if target > MAX_LENGTH as u32 {
                return Err(PrefixError::SubnetCountExceedsSpace {
                    origin_prefix,
                    count,
                });
            }
            Ok(target as u8)
        }
    }
}

/// `ceil(log2(value))` in integer arithmetic; 0 for values 0 and 1.
fn ceil_log2(value: u64) -> u32 {
    if value <= 1 {
        0
    } else {
        u64::BITS - (value - 1).leading_zeros()
    }
}

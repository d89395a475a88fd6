//! Subnet calculation request model.

/// How the caller wants the target prefix length determined.
///
/// One request is built per user-triggered calculation and resolved by
/// [`crate::processing::resolve_prefix`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubnetRequest {
    /// Use this prefix length as-is (1-32).
    ExplicitPrefix(u8),
    /// Pick the smallest block holding at least this many usable hosts.
    ByHostCount(u64),
    /// Split an origin block into at least `count` equal subnets by
    /// borrowing host bits.
    BySubnetCount { origin_prefix: u8, count: u64 },
}

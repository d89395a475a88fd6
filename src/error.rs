//! Error types for subnet calculations.
//!
//! All failures are returned as values; a failed calculation is terminal
//! for that invocation and the caller prompts for corrected input.

use thiserror::Error;

/// Errors from resolving a [`crate::models::SubnetRequest`] to a prefix length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    /// Prefix length outside the range the request mode accepts.
    #[error("prefix length /{0} is out of range")]
    PrefixOutOfRange(u8),

    /// No IPv4 prefix can hold the requested number of hosts.
    #[error("no IPv4 prefix can hold {0} hosts")]
    HostCountTooLarge(u64),

    /// Splitting the origin block into the requested number of subnets
    /// would need a prefix longer than /32.
    #[error("cannot split /{origin_prefix} into {count} subnets, not enough space")]
    SubnetCountExceedsSpace { origin_prefix: u8, count: u64 },
}

/// Errors from building a [`crate::models::Network`] out of raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The address text is not four dot-separated decimal octets in 0-255.
    #[error("invalid IPv4 address {0:?}")]
    InvalidAddressFormat(String),

    /// Prefix length outside 0-32.
    #[error("prefix length /{0} is out of range")]
    PrefixOutOfRange(u8),
}

/// Union of the calculation error types, for the end-to-end path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Prefix(#[from] PrefixError),

    #[error(transparent)]
    Address(#[from] AddressError),
}

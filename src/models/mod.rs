//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Network`] - an IPv4 CIDR block in canonical (host-bits-zero) form
//! - [`SubnetRequest`] - the three ways a target prefix can be requested

mod ipv4;
mod request;

// Re-export public types
pub use ipv4::{clear_host_bits, prefix_to_mask, Network, MAX_LENGTH};
pub use request::SubnetRequest;

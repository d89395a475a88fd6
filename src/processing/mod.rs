//! Subnet calculation logic.
//!
//! The three stages of a calculation, composed linearly by
//! [`crate::run_calculation`]:
//! - [`resolver`] - request mode -> target prefix length
//! - [`builder`] - address text + prefix -> canonical network
//! - [`sequencer`] - network + count -> consecutive subnet rows

mod builder;
mod resolver;
mod sequencer;

// Re-export public functions
pub use builder::build_network;
pub use resolver::resolve_prefix;
pub use sequencer::{sequence_subnets, SubnetRow};

//! IPv4 network arithmetic.
//!
//! Provides the [`Network`] struct, a CIDR block held in canonical form
//! (host bits cleared), along with mask conversion utilities.

use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AddressError;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24), 0xFFFFFF00);
/// assert_eq!(prefix_to_mask(0), 0x00000000);
/// ```
pub fn prefix_to_mask(prefix: u8) -> u32 {
    assert!(prefix <= MAX_LENGTH, "prefix must be validated before use");
    let right_len = MAX_LENGTH - prefix;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Clear the host bits of an address, yielding the block's network address.
pub fn clear_host_bits(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    let bits = u32::from(addr) & prefix_to_mask(prefix);
    Ipv4Addr::from(bits)
}

/// An IPv4 network: base address plus prefix length.
///
/// Invariant: `addr` always has its host bits cleared, so it is the network
/// address of the block, never an arbitrary member. The constructor
/// normalizes, which is why the fields are private.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Create a [`Network`] from any member address and a prefix length,
    /// clearing the host bits. A host address like `192.168.1.10/24`
    /// canonicalizes to `192.168.1.0/24`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network, AddressError> {
        if prefix > MAX_LENGTH {
            return Err(AddressError::PrefixOutOfRange(prefix));
        }
        Ok(Network {
            addr: clear_host_bits(addr, prefix),
            prefix,
        })
    }

    /// Create a [`Network`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn from_cidr(addr_cidr: &str) -> Result<Network, AddressError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(AddressError::InvalidAddressFormat(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| AddressError::InvalidAddressFormat(parts[0].to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| AddressError::InvalidAddressFormat(addr_cidr.to_string()))?;
        Network::new(addr, prefix)
    }

    /// The network address (lowest address in the block).
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The subnet mask in dotted form, e.g. `255.255.255.0` for a /24.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_to_mask(self.prefix))
    }

    /// The wildcard mask (bitwise complement of the netmask), as used in
    /// access-control-list rule matching.
    pub fn wildcard_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!prefix_to_mask(self.prefix))
    }

    /// The broadcast address (highest address in the block).
    pub fn broadcast(&self) -> Ipv4Addr {
        let bits = u32::from(self.addr) | !prefix_to_mask(self.prefix);
        Ipv4Addr::from(bits)
    }

    /// Total number of addresses in the block, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Number of usable host addresses: block size minus the network and
    /// broadcast reservations, floored at 0 for /31 and /32.
    pub fn usable_hosts(&self) -> u64 {
        self.size().saturating_sub(2)
    }

    /// First usable host address, `None` for /31 and /32 where no host
    /// range exists.
    pub fn first_host(&self) -> Option<Ipv4Addr> {
        if self.prefix >= MAX_LENGTH - 1 {
            return None;
        }
        Some(Ipv4Addr::from(u32::from(self.addr) + 1))
    }

    /// Last usable host address, `None` for /31 and /32.
    pub fn last_host(&self) -> Option<Ipv4Addr> {
        if self.prefix >= MAX_LENGTH - 1 {
            return None;
        }
        Some(Ipv4Addr::from(u32::from(self.broadcast()) - 1))
    }

    /// The next same-size network directly after this one, or `None` when
    /// the step would run past the top of the IPv4 space.
    pub fn next_adjacent(&self) -> Option<Network> {
        let next_base = u32::from(self.addr) as u64 + self.size();
        if next_base > u32::MAX as u64 {
            return None;
        }
        Some(Network {
            addr: Ipv4Addr::from(next_base as u32),
            prefix: self.prefix,
        })
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(0), 0x00000000);
        assert_eq!(prefix_to_mask(8), 0xFF000000);
        assert_eq!(prefix_to_mask(16), 0xFFFF0000);
        assert_eq!(prefix_to_mask(24), 0xFFFFFF00);
        assert_eq!(prefix_to_mask(30), 0xFFFFFFFC);
        assert_eq!(prefix_to_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_clear_host_bits() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(clear_host_bits(ip, 24), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(clear_host_bits(ip, 16), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(clear_host_bits(ip, 8), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(clear_host_bits(ip, 32), Ipv4Addr::new(192, 168, 1, 42));
    }

    #[test]
    fn test_new_normalizes() {
        let net = Network::new(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(net.prefix(), 24);

        // Building again from the normalized address is a no-op.
        let again = Network::new(net.addr(), net.prefix()).unwrap();
        assert_eq!(net, again);
    }

    #[test]
    fn test_new_rejects_long_prefix() {
        assert_eq!(
            Network::new(Ipv4Addr::new(10, 0, 0, 0), 33),
            Err(AddressError::PrefixOutOfRange(33))
        );
    }

    #[test]
    fn test_from_cidr() {
        let net = Network::from_cidr("10.1.1.0/28").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(net.prefix(), 28);
        assert_eq!(net.to_string(), "10.1.1.0/28");

        // Non-aligned input normalizes.
        let net = Network::from_cidr("10.1.1.7/28").unwrap();
        assert_eq!(net.to_string(), "10.1.1.0/28");

        assert!(Network::from_cidr("10.1.1.0").is_err());
        assert!(Network::from_cidr("10.1.1.0/abc").is_err());
        assert!(Network::from_cidr("10.1.1.0/33").is_err());
    }

    #[test]
    fn test_broadcast() {
        let mk = |p| Network::new(Ipv4Addr::new(192, 168, 1, 0), p).unwrap();
        assert_eq!(mk(24).broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(mk(16).broadcast(), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(mk(8).broadcast(), Ipv4Addr::new(192, 255, 255, 255));
        assert_eq!(mk(32).broadcast(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(mk(0).broadcast(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_masks() {
        let net = Network::from_cidr("192.168.1.0/24").unwrap();
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(net.wildcard_mask(), Ipv4Addr::new(0, 0, 0, 255));

        let net = Network::from_cidr("10.0.0.0/26").unwrap();
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(net.wildcard_mask(), Ipv4Addr::new(0, 0, 0, 63));
    }

    #[test]
    fn test_size_and_usable_hosts() {
        assert_eq!(Network::from_cidr("10.0.0.0/24").unwrap().size(), 256);
        assert_eq!(Network::from_cidr("10.0.0.0/24").unwrap().usable_hosts(), 254);
        assert_eq!(Network::from_cidr("10.0.0.0/30").unwrap().usable_hosts(), 2);
        assert_eq!(Network::from_cidr("10.0.0.0/31").unwrap().usable_hosts(), 0);
        assert_eq!(Network::from_cidr("10.0.0.0/32").unwrap().usable_hosts(), 0);
        assert_eq!(Network::from_cidr("0.0.0.0/0").unwrap().size(), 1u64 << 32);
    }

    #[test]
    fn test_host_range() {
        let net = Network::from_cidr("192.168.1.0/24").unwrap();
        assert_eq!(net.first_host(), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(net.last_host(), Some(Ipv4Addr::new(192, 168, 1, 254)));

        // No host range at /31 and /32.
        assert_eq!(Network::from_cidr("10.0.0.0/31").unwrap().first_host(), None);
        assert_eq!(Network::from_cidr("10.0.0.0/31").unwrap().last_host(), None);
        assert_eq!(Network::from_cidr("10.0.0.0/32").unwrap().first_host(), None);
    }

    #[test]
    fn test_next_adjacent() {
        let next = |s: &str| Network::from_cidr(s).unwrap().next_adjacent();
        assert_eq!(next("192.168.1.0/24"), Some(Network::from_cidr("192.168.2.0/24").unwrap()));
        assert_eq!(next("192.168.1.0/16"), Some(Network::from_cidr("192.169.0.0/16").unwrap()));
        assert_eq!(next("10.1.1.0/28"), Some(Network::from_cidr("10.1.1.16/28").unwrap()));
        assert_eq!(next("10.1.1.8/29"), Some(Network::from_cidr("10.1.1.16/29").unwrap()));

        // Top of the address space.
        assert_eq!(next("255.255.255.0/24"), None);
        assert_eq!(next("255.255.255.255/32"), None);
        assert_eq!(next("128.0.0.0/1"), None);
        assert_eq!(next("0.0.0.0/0"), None);
    }

    #[test]
    fn test_network_cmp() {
        let n1 = Network::from_cidr("10.0.0.0/24").unwrap();
        let n2 = Network::from_cidr("10.0.1.0/24").unwrap();
        let n3 = Network::from_cidr("10.0.0.0/24").unwrap();

        assert!(n1 < n2);
        assert!(n1 == n3);
        assert!(n2 > n1);
    }
}

//! Network building: raw address text plus prefix length -> canonical [`Network`].

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AddressError;
use crate::models::Network;

/// Parse `address_text` as a dotted-quad IPv4 address and combine it with
/// `prefix` into a canonical [`Network`].
///
/// Surrounding whitespace is trimmed, then the text must be exactly four
/// dot-separated decimal octets in 0-255. The result always has its host
/// bits cleared: callers may type a member address like `192.168.1.10`
/// and still get the block `192.168.1.0/24` back.
pub fn build_network(address_text: &str, prefix: u8) -> Result<Network, AddressError> {
    let addr = Ipv4Addr::from_str(address_text.trim())
        .map_err(|_| AddressError::InvalidAddressFormat(address_text.to_string()))?;
    Network::new(addr, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_network_normalizes() {
        let net = build_network("192.168.1.10", 24).unwrap();
        assert_eq!(net.to_string(), "192.168.1.0/24");
        assert_eq!(net.broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(net.usable_hosts(), 254);
    }

    #[test]
    fn test_build_network_idempotent() {
        let net = build_network("10.20.30.40", 19).unwrap();
        let again = build_network(&net.addr().to_string(), net.prefix()).unwrap();
        assert_eq!(net, again);
    }

    #[test]
    fn test_build_network_trims_whitespace() {
        let net = build_network("  192.168.0.0  ", 16).unwrap();
        assert_eq!(net.to_string(), "192.168.0.0/16");
    }

    #[test]
    fn test_build_network_invalid_format() {
        for bad in [
            "192.168.1",
            "192.168.1.1.1",
            "192.168.1.256",
            "192.168.one.1",
            "192,168,1,1",
            "",
            "hello",
        ] {
            assert_eq!(
                build_network(bad, 24),
                Err(AddressError::InvalidAddressFormat(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_build_network_prefix_out_of_range() {
        assert_eq!(
            build_network("10.0.0.0", 33),
            Err(AddressError::PrefixOutOfRange(33))
        );
        // /0 is a valid block when given explicitly to the builder.
        assert!(build_network("10.0.0.0", 0).is_ok());
    }
}

//! ENS name resolution (EIP-137).
//!
//! Resolution is two reads: the registry maps a name's node to its resolver,
//! and the resolver maps the node to an address.

use alloy::primitives::{address, keccak256, Address, B256};
use alloy::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface ENSRegistry {
        function resolver(bytes32 node) external view returns (address);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface ENSResolver {
        function addr(bytes32 node) external view returns (address);
    }
}

/// The ENS registry, deployed at the same address on mainnet and testnets.
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Normalize a name before hashing.
///
/// Only ASCII case folding and surrounding dots are handled; names needing
/// full UTS-46 processing must be normalized by the caller.
pub fn normalize(name: &str) -> String {
    name.trim().trim_matches('.').to_lowercase()
}

/// Compute the namehash of a name.
pub fn namehash(name: &str) -> B256 {
    let name = normalize(name);
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}

/// Whether a string looks like a resolvable ENS name rather than an address.
///
/// Dotless labels such as `localhost` are rejected.
pub fn is_ens_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.parse::<Address>().is_err() && name.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_namehash_vectors() {
        assert_eq!(namehash(""), B256::ZERO);
        assert_eq!(
            namehash("eth"),
            b256!("93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae")
        );
        assert_eq!(
            namehash("foo.eth"),
            b256!("de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f")
        );
    }

    #[test]
    fn test_namehash_is_case_insensitive() {
        assert_eq!(namehash("Foo.ETH"), namehash("foo.eth"));
        assert_eq!(namehash("foo.eth."), namehash("foo.eth"));
    }

    #[test]
    fn test_is_ens_name() {
        assert!(is_ens_name("vitalik.eth"));
        assert!(!is_ens_name("0x2ee1d96cb76579e2c64c9bb045443fb3849491d2"));
        assert!(!is_ens_name("localhost"));
        assert!(!is_ens_name(""));
    }

    #[test]
    fn test_selectors() {
        assert_eq!(ENSRegistry::resolverCall::SELECTOR, [0x01, 0x78, 0xb8, 0xbf]);
        assert_eq!(ENSResolver::addrCall::SELECTOR, [0x3b, 0x3b, 0x57, 0xde]);
    }
}

//! Keccak-256 based name hashing.
//!
//! The external registrar identifies a name in two ways: the registry of
//! record uses the label hash of the bare label, while the ownership-data
//! service keys wrapped names by their full node hash (`namehash`).

use crate::uint256::UInt256;
use sha3::{Digest, Keccak256};

/// Computes the Keccak-256 digest of `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Recursive namehash of a dotted domain. The empty domain hashes to zero.
#[must_use]
pub fn namehash(domain: &str) -> UInt256 {
    if domain.is_empty() {
        return UInt256::zero();
    }
    domain
        .rsplit('.')
        .fold(UInt256::zero(), |node, label| {
            node.child(&UInt256::label_hash(label))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_hash_vector() {
        assert_eq!(
            UInt256::label_hash("eth").to_hex_string(),
            "0x4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"
        );
    }

    #[test]
    fn test_namehash_vectors() {
        assert!(namehash("").is_zero());
        assert_eq!(
            namehash("eth").to_hex_string(),
            "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
        );
    }

    #[test]
    fn test_namehash_matches_child_derivation() {
        let tld = namehash("eth");
        let expected = tld.child(&UInt256::label_hash("alice"));
        assert_eq!(namehash("alice.eth"), expected);
    }
}

//! Implementation of `UInt256`, a 256-bit value used for name hashes,
//! commitments and registration secrets.

use crate::error::{PrimitiveError, PrimitiveResult};
use crate::name_hash::keccak256;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = 32;

/// Represents a 256-bit unsigned integer in digest byte order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    /// Alias matching C# `UInt256.Length`.
    pub const LENGTH: usize = UINT256_SIZE;

    /// Returns a zero `UInt256`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT256_SIZE])
    }

    /// Checks if this `UInt256` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt256` from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let array: [u8; UINT256_SIZE] =
            value.try_into().map_err(|_| PrimitiveError::InvalidLength {
                expected: UINT256_SIZE,
                actual: value.len(),
            })?;
        Ok(Self(array))
    }

    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Hash of a single label (`keccak256(label)`), the registrar's token id.
    #[must_use]
    pub fn label_hash(label: &str) -> Self {
        Self(keccak256(label.as_bytes()))
    }

    /// Node of `label` directly under this node: `keccak256(self || label_hash)`.
    #[must_use]
    pub fn child(&self, label_hash: &UInt256) -> Self {
        let mut data = [0u8; UINT256_SIZE * 2];
        data[..UINT256_SIZE].copy_from_slice(&self.0);
        data[UINT256_SIZE..].copy_from_slice(&label_hash.0);
        Self(keccak256(&data))
    }

    /// Parses a `UInt256` from a hexadecimal string with optional `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` for anything but 64 hex digits.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != UINT256_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt256 needs {} hex digits, got {}",
                UINT256_SIZE * 2,
                digits.len()
            )));
        }

        let bytes = hex::decode(digits)
            .map_err(|e| PrimitiveError::invalid_format(format!("UInt256: {e}")))?;
        Self::from_bytes(&bytes)
    }

    #[inline]
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for UInt256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self(data)
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = UInt256;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed 64 digit hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                UInt256::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

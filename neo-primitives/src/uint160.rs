//! Implementation of `UInt160`, a 160-bit value identifying accounts and contracts.

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = 20;

/// Represents a 160-bit unsigned integer.
///
/// The zero value doubles as the "no account" marker in rental records.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching C# `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let array: [u8; UINT160_SIZE] =
            value.try_into().map_err(|_| PrimitiveError::InvalidLength {
                expected: UINT160_SIZE,
                actual: value.len(),
            })?;
        Ok(Self(array))
    }

    /// Gets a byte array representation of the `UInt160`.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Returns the bytes as a `Vec<u8>`.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Parses a `UInt160` from a hexadecimal string with optional `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input string is not a valid
    /// 40-character hexadecimal string.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt160 needs {} hex digits, got {}",
                UINT160_SIZE * 2,
                digits.len()
            )));
        }

        let bytes = hex::decode(digits)
            .map_err(|e| PrimitiveError::invalid_format(format!("UInt160: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to a `0x`-prefixed hexadecimal string.
    #[inline]
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> std::result::Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = UInt160;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed 40 digit hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                UInt160::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uint160_zero() {
        let uint = UInt160::zero();
        assert!(uint.is_zero());
        assert_eq!(uint, UInt160::default());
    }

    #[test]
    fn test_uint160_from_bytes() {
        let mut bytes = [0u8; UINT160_SIZE];
        bytes[0] = 1;
        let uint = UInt160::from_bytes(&bytes).unwrap();
        assert!(!uint.is_zero());
        assert_eq!(uint.to_array(), bytes);
    }

    #[test]
    fn test_uint160_from_bytes_wrong_length() {
        let err = UInt160::from_bytes(&[0u8; 21]).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::InvalidLength {
                expected: 20,
                actual: 21
            }
        );
    }

    #[test]
    fn test_uint160_parse() {
        let uint = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(uint.to_array()[19], 1);
        assert_eq!(
            uint.to_string(),
            "0x0000000000000000000000000000000000000001"
        );

        assert!(UInt160::parse("0x01").is_err());
        assert!(UInt160::parse("zz00000000000000000000000000000000000001").is_err());
    }

    #[test]
    fn test_uint160_serde_as_hex() {
        let uint = UInt160::from([7u8; 20]);
        let json = serde_json::to_string(&uint).unwrap();
        assert_eq!(json, format!("\"{}\"", uint.to_hex_string()));
        let back: UInt160 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uint);
    }

    proptest! {
        #[test]
        fn test_parse_hex_string(hex in "[0-9a-fA-F]{40}") {
            let uint = UInt160::parse(&format!("0x{}", hex)).unwrap();
            let uint2 = UInt160::parse(&uint.to_hex_string()).unwrap();
            prop_assert_eq!(uint, uint2);
        }

        #[test]
        fn test_zero_only_for_all_zero_bytes(bytes in any::<[u8; UINT160_SIZE]>()) {
            let uint = UInt160::from(bytes);
            prop_assert_eq!(uint.is_zero(), bytes.iter().all(|b| *b == 0));
        }
    }
}

//! # Neo Primitives
//!
//! Fundamental types shared by the rental ledger crates.
//!
//! - `UInt160`: 160-bit value used for account and contract hashes
//! - `UInt256`: 256-bit value used for name hashes, commitments and secrets
//! - [`name_hash`]: Keccak-256 label hashing and recursive namehash derivation
//!
//! ## Design Principles
//!
//! - **Zero dependencies on other neo-* crates**
//! - Hashes are stored and displayed in digest byte order
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::{UInt160, UInt256};
//!
//! let account = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert!(!account.is_zero());
//!
//! let label = UInt256::label_hash("alice");
//! assert!(!label.is_zero());
//! ```

pub mod error;
pub mod name_hash;
pub mod uint160;
pub mod uint256;

pub use error::{PrimitiveError, PrimitiveResult};
pub use name_hash::{keccak256, namehash};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};

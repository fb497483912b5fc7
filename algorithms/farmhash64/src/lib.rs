#![cfg_attr(not(feature = "std"), no_std)]

//! # farmhash64
//!
//! Deterministic, non-cryptographic FarmHash64 fingerprints of byte
//! buffers: a 64-bit hash plus a folded 32-bit variant, suitable for
//! hash-table keying, content deduplication, sharding and fast
//! equality pre-checks.

//! # Usage
//! ```rust
//! // 64-bit fingerprint
//! let h64 = farmhash64::hash64(b"content to key");
//!
//! // 32-bit variant: a fold of the 64-bit result
//! let h32 = farmhash64::hash32(b"content to key");
//! assert_eq!(h32, farmhash64::fold64_to_32(h64));
//! ```
//!
//! Output is bit-identical on every platform and endianness, calls are
//! allocation-free and thread-safe, and running time is linear in
//! input length. Do **not** use where cryptographic hashing is
//! required.

// =============================================================================
// MODULES
// =============================================================================

mod constants;
#[cfg(feature = "std")]
mod ffi;
mod long;
mod mix;
mod oneshot;
mod short;

// =============================================================================
// EXPORTS
// =============================================================================

pub use mix::fold64_to_32;
pub use oneshot::{hash32, hash64};

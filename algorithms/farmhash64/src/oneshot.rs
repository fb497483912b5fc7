//! Public API Layer
//!
//! Whole-buffer entry points. Dispatch is by length only; every call
//! is a single pass with no retained state, so concurrent callers need
//! no synchronization.

use crate::mix::fold64_to_32;
use crate::{long, short};

/// Compute the 64-bit fingerprint of `input`.
///
/// Total and deterministic over all lengths, including the empty
/// buffer, and bit-identical across platforms and endianness. Not
/// cryptographic: no collision resistance against adversarial input.
///
/// # Example
/// ```rust
/// assert_eq!(farmhash64::hash64(b"Hello, World!"), 11_358_326_526_432_651_330);
/// assert_eq!(farmhash64::hash64(b""), 0x9AE1_6A3B_2F90_404F);
/// ```
#[must_use]
#[inline]
pub fn hash64(input: &[u8]) -> u64 {
    match input.len() {
        0..=16 => short::hash_0_to_16(input),
        17..=32 => short::hash_17_to_32(input),
        33..=64 => short::hash_33_to_64(input),
        _ => long::hash_long(input),
    }
}

/// Compute the 32-bit fingerprint of `input`.
///
/// Defined as [`fold64_to_32`] applied to [`hash64`] — an intentional
/// derivation, not an independent 32-bit algorithm, and therefore not
/// compatible with any other 32-bit FarmHash variant.
///
/// # Example
/// ```rust
/// assert_eq!(farmhash64::hash32(b"Hello, World!"), 4_101_594_851);
/// ```
#[must_use]
#[inline]
pub fn hash32(input: &[u8]) -> u32 {
    fold64_to_32(hash64(input))
}

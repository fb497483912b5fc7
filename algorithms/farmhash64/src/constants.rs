//! FarmHash64 Mixing Constants
//!
//! Process-wide compile-time constants; nothing here is lazily
//! initialized, so concurrent first calls never race.
//!
//! `K0`..`K2` are odd primes between 2^63 and 2^64 chosen upstream for
//! good bit dispersion under multiplication and rotation. `C1`/`C2`
//! are the Murmur3 round constants used by the 32-bit fold.

// =============================================================================
// 64-BIT PRIMES
// =============================================================================

/// Prime multiplier, paired with `K2` in the 1–3 byte handler.
pub(crate) const K0: u64 = 0xC3A5_C85C_97CB_3127;

/// Prime multiplier for the long-input block loop.
pub(crate) const K1: u64 = 0xB492_B66F_BE98_F273;

/// Prime multiplier and the fingerprint of the empty input.
pub(crate) const K2: u64 = 0x9AE1_6A3B_2F90_404F;

// =============================================================================
// 32-BIT MURMUR3 CONSTANTS
// =============================================================================

/// First Murmur3 round multiplier.
pub(crate) const C1: u32 = 0xCC9E_2D51;

/// Second Murmur3 round multiplier.
pub(crate) const C2: u32 = 0x1B87_3593;

// =============================================================================
// LONG-INPUT SEED
// =============================================================================

/// Fixed seed for the `n > 64` state initialization. Baked into the
/// output contract; changing it changes every long-input fingerprint.
pub(crate) const SEED: u64 = 81;

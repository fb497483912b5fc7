//! Bit-Mixing Primitives
//!
//! Rotations, unaligned little-endian loads and the scalar mixing
//! steps shared by every length handler. All arithmetic is wrapping;
//! overflow semantics are part of the output contract.

#![allow(clippy::inline_always)] // single-instruction helpers on the hot path
#![allow(clippy::many_single_char_names)] // variable names follow the published algorithm

use crate::constants::{C1, C2};

// =============================================================================
// ROTATIONS & LOADS
// =============================================================================

/// Circular right rotation. `shift == 0` is a no-op, not a fault.
#[inline(always)]
pub(crate) const fn ror32(val: u32, shift: u32) -> u32 {
    val.rotate_right(shift)
}

/// Circular right rotation. `shift == 0` is a no-op, not a fault.
#[inline(always)]
pub(crate) const fn ror64(val: u64, shift: u32) -> u64 {
    val.rotate_right(shift)
}

/// Read 4 bytes at `idx` as a little-endian word.
///
/// Explicit byte assembly, never a reinterpret-cast of host words, so
/// big- and little-endian targets fingerprint identically. The caller
/// guarantees `idx + 4 <= buf.len()`; a violation is an internal
/// dispatch bug and trips the slice bounds check.
#[inline(always)]
pub(crate) fn load32(buf: &[u8], idx: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[idx..idx + 4]);
    u32::from_le_bytes(word)
}

/// Read 8 bytes at `idx` as a little-endian word.
///
/// Same contract as [`load32`]: explicit little-endian assembly, and
/// `idx + 8 <= buf.len()` is on the caller.
#[inline(always)]
pub(crate) fn load64(buf: &[u8], idx: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[idx..idx + 8]);
    u64::from_le_bytes(word)
}

// =============================================================================
// SCALAR MIXERS
// =============================================================================

/// Fold the top bits of `val` back into the bottom.
#[inline(always)]
pub(crate) const fn shift_mix(val: u64) -> u64 {
    val ^ (val >> 47)
}

/// One Murmur3 round: mix `a` into the accumulator `h`.
#[inline]
pub(crate) const fn mur(a: u32, h: u32) -> u32 {
    let a = a.wrapping_mul(C1);
    let a = ror32(a, 17);
    let a = a.wrapping_mul(C2);
    let h = ror32(h ^ a, 19);
    h.wrapping_mul(5).wrapping_add(0xE654_6B64)
}

/// Fold a 64-bit value into 32 bits with one Murmur3 round.
///
/// This is the derivation step behind [`crate::hash32`]: the 32-bit
/// fingerprint is defined as this fold of the 64-bit one, not as an
/// independent 32-bit algorithm.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)] // truncating split is the point
pub const fn fold64_to_32(x: u64) -> u32 {
    mur((x >> 32) as u32, x as u32)
}

/// Terminal two-value mixer used by every handler.
#[inline]
pub(crate) const fn combine16(u: u64, v: u64, mul: u64) -> u64 {
    let a = (u ^ v).wrapping_mul(mul);
    let a = a ^ (a >> 47);
    let b = (v ^ a).wrapping_mul(mul);
    let b = b ^ (b >> 47);
    b.wrapping_mul(mul)
}

// =============================================================================
// TESTS
// =============================================================================

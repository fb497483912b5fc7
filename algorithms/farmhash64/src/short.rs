//! Short-Input Handlers
//!
//! Closed-form fingerprints for inputs of at most 64 bytes, dispatched
//! strictly by length. Each bucket reads a fixed set of offsets
//! relative to the start and end of the buffer; the offset arithmetic
//! is bit-for-bit part of the output contract.

#![allow(clippy::cast_possible_truncation)] // usize lengths fit u64 on all supported targets
#![allow(clippy::many_single_char_names)] // variable names follow the published algorithm

use crate::constants::{K0, K1, K2};
use crate::mix::{combine16, load32, load64, ror64, shift_mix};

// =============================================================================
// 0..=16 BYTES
// =============================================================================

/// Fingerprint for `buf.len() <= 16`, including the empty input.
pub(crate) fn hash_0_to_16(buf: &[u8]) -> u64 {
    let n = buf.len();

    if n >= 8 {
        let mul = K2.wrapping_add(n as u64 * 2);
        let a = load64(buf, 0).wrapping_add(K2);
        let b = load64(buf, n - 8);
        let c = ror64(b, 37).wrapping_mul(mul).wrapping_add(a);
        let d = ror64(a, 25).wrapping_add(b).wrapping_mul(mul);
        return combine16(c, d, mul);
    }

    if n >= 4 {
        let mul = K2.wrapping_add(n as u64 * 2);
        let a = u64::from(load32(buf, 0));
        let u = (n as u64).wrapping_add(a << 3);
        let v = u64::from(load32(buf, n - 4));
        return combine16(u, v, mul);
    }

    if n > 0 {
        let a = u32::from(buf[0]);
        let b = u32::from(buf[n >> 1]);
        let c = u32::from(buf[n - 1]);
        let y = a.wrapping_add(b << 8);
        let z = (n as u32).wrapping_add(c << 2);
        let mixed = u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0);
        return shift_mix(mixed).wrapping_mul(K2);
    }

    K2
}

// =============================================================================
// 17..=32 BYTES
// =============================================================================

/// Fingerprint for `17 <= buf.len() <= 32`.
pub(crate) fn hash_17_to_32(buf: &[u8]) -> u64 {
    let n = buf.len();
    let mul = K2.wrapping_add(n as u64 * 2);
    let a = load64(buf, 0).wrapping_mul(K1);
    let b = load64(buf, 8);
    let c = load64(buf, n - 8).wrapping_mul(mul);
    let d = load64(buf, n - 16).wrapping_mul(K2);

    combine16(
        ror64(a.wrapping_add(b), 43)
            .wrapping_add(ror64(c, 30))
            .wrapping_add(d),
        a.wrapping_add(ror64(b.wrapping_add(K2), 18)).wrapping_add(c),
        mul,
    )
}

// =============================================================================
// 33..=64 BYTES
// =============================================================================

/// Fingerprint for `33 <= buf.len() <= 64`.
///
/// Two-stage extension of the 17–32 formula. The first stage mirrors
/// it except the leading word is multiplied by `K2`, not `K1`; the
/// second stage folds the words at offsets 16, 24, `n - 32` and
/// `n - 24` against the first stage's `y`/`z`.
pub(crate) fn hash_33_to_64(buf: &[u8]) -> u64 {
    let n = buf.len();
    let mul = K2.wrapping_add(n as u64 * 2);
    let a = load64(buf, 0).wrapping_mul(K2);
    let b = load64(buf, 8);
    let c = load64(buf, n - 8).wrapping_mul(mul);
    let d = load64(buf, n - 16).wrapping_mul(K2);

    let y = ror64(a.wrapping_add(b), 43)
        .wrapping_add(ror64(c, 30))
        .wrapping_add(d);
    let z = combine16(
        y,
        a.wrapping_add(ror64(b.wrapping_add(K2), 18)).wrapping_add(c),
        mul,
    );

    let e = load64(buf, 16).wrapping_mul(mul);
    let f = load64(buf, 24);
    let g = y.wrapping_add(load64(buf, n - 32)).wrapping_mul(mul);
    let h = z.wrapping_add(load64(buf, n - 24)).wrapping_mul(mul);

    combine16(
        ror64(e.wrapping_add(f), 43)
            .wrapping_add(ror64(g, 30))
            .wrapping_add(h),
        e.wrapping_add(ror64(f.wrapping_add(a), 18)).wrapping_add(g),
        mul,
    )
}

// =============================================================================
// TESTS
// =============================================================================

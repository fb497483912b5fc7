//! Long-Input Driver
//!
//! The `n > 64` path: a 64-byte block loop over five words of working
//! state, a tail step over the final 64-byte window, and the terminal
//! combine. State is a plain stack record created at entry and dropped
//! at return; nothing is shared between invocations.

#![allow(clippy::cast_possible_truncation)] // usize lengths fit u64 on all supported targets
#![allow(clippy::many_single_char_names)] // variable names follow the published algorithm

use core::mem;

use crate::constants::{K0, K1, K2, SEED};
use crate::mix::{combine16, load64, ror64, shift_mix};

// =============================================================================
// WORKING STATE
// =============================================================================

/// One conceptual 128-bit half of the loop state.
#[derive(Clone, Copy)]
struct Pair {
    lo: u64,
    hi: u64,
}

/// The five-word loop state: two pairs plus three scalars.
struct State {
    v: Pair,
    w: Pair,
    x: u64,
    y: u64,
    z: u64,
}

// =============================================================================
// WEAK COMBINER
// =============================================================================

/// Combine four data words and two seeds into a pseudo-random pair.
///
/// Quick and dirty by design; only sound when `a` and `b` arrive
/// already random-looking, which the block loop guarantees.
const fn weak_combine32_words(w: u64, x: u64, y: u64, z: u64, a: u64, b: u64) -> Pair {
    let a = a.wrapping_add(w);
    let b = ror64(b.wrapping_add(a).wrapping_add(z), 21);
    let c = a;
    let a = a.wrapping_add(x).wrapping_add(y);
    let b = b.wrapping_add(ror64(a, 44));
    Pair {
        lo: a.wrapping_add(z),
        hi: b.wrapping_add(c),
    }
}

/// Combine a 32-byte window (read as four little-endian words at
/// offsets 0, 8, 16, 24) with two seeds.
fn weak_combine32(window: &[u8], a: u64, b: u64) -> Pair {
    weak_combine32_words(
        load64(window, 0),
        load64(window, 8),
        load64(window, 16),
        load64(window, 24),
        a,
        b,
    )
}

// =============================================================================
// BLOCK ROUND
// =============================================================================

/// One rotate/multiply/recombine round over a 64-byte block.
///
/// The loop runs this with `mul = K1, scale = 1`; the tail step reuses
/// it with the length-derived `mul` and `scale = 9`.
fn round(st: &mut State, block: &[u8], mul: u64, scale: u64) {
    st.x = ror64(
        st.x.wrapping_add(st.y)
            .wrapping_add(st.v.lo)
            .wrapping_add(load64(block, 8)),
        37,
    )
    .wrapping_mul(mul);
    st.y = ror64(
        st.y.wrapping_add(st.v.hi).wrapping_add(load64(block, 48)),
        42,
    )
    .wrapping_mul(mul);
    st.x ^= st.w.hi.wrapping_mul(scale);
    st.y = st
        .y
        .wrapping_add(st.v.lo.wrapping_mul(scale))
        .wrapping_add(load64(block, 40));
    st.z = ror64(st.z.wrapping_add(st.w.lo), 33).wrapping_mul(mul);
    st.v = weak_combine32(
        block,
        st.v.hi.wrapping_mul(mul),
        st.x.wrapping_add(st.w.lo),
    );
    st.w = weak_combine32(
        &block[32..],
        st.z.wrapping_add(st.w.hi),
        st.y.wrapping_add(load64(block, 16)),
    );
    mem::swap(&mut st.x, &mut st.z);
}

// =============================================================================
// DRIVER
// =============================================================================

/// Fingerprint for `buf.len() > 64`.
pub(crate) fn hash_long(buf: &[u8]) -> u64 {
    let n = buf.len();

    let y = SEED.wrapping_mul(K1).wrapping_add(113);
    let mut st = State {
        v: Pair { lo: 0, hi: 0 },
        w: Pair { lo: 0, hi: 0 },
        x: SEED.wrapping_mul(K2).wrapping_add(load64(buf, 0)),
        y,
        z: shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2),
    };

    // The loop consumes whole 64-byte blocks and leaves 1..=64 bytes;
    // the tail window is always the final 64 bytes, overlapping the
    // last full block unless the length is a multiple of 64.
    let tail = &buf[n - 64..];

    let mut cursor = 0;
    while n - cursor > 64 {
        round(&mut st, &buf[cursor..], K1, 1);
        cursor += 64;
    }

    let mul = K1.wrapping_add((st.z & 0xFF) << 1);
    st.w.lo = st.w.lo.wrapping_add(((n - 1) & 63) as u64);
    st.v.lo = st.v.lo.wrapping_add(st.w.lo);
    st.w.lo = st.w.lo.wrapping_add(st.v.lo);
    round(&mut st, tail, mul, 9);

    combine16(
        combine16(st.v.lo, st.w.lo, mul)
            .wrapping_add(shift_mix(st.y).wrapping_mul(K0))
            .wrapping_add(st.z),
        combine16(st.v.hi, st.w.hi, mul).wrapping_add(st.x),
        mul,
    )
}

// =============================================================================
// TESTS
// =============================================================================

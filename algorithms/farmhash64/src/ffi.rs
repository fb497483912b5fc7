//! C-API Bindings
//!
//! Exposes the two fingerprint entry points over a C ABI so the crate
//! can back `cdylib`/`staticlib` consumers. The functions are total:
//! there is no error channel and no failure mode on valid input.

#![allow(unsafe_code)]

use core::slice;

/// Compute the 64-bit fingerprint of a byte buffer.
///
/// A null or zero-length input hashes as the empty buffer; the
/// pointer is never dereferenced in either case.
///
/// # Safety
/// - A non-null `input_ptr` must be valid for `input_len` readable
///   bytes.
#[no_mangle]
pub unsafe extern "C" fn farmhash64_hash64(input_ptr: *const u8, input_len: usize) -> u64 {
    if input_ptr.is_null() || input_len == 0 {
        return crate::hash64(&[]);
    }
    let input = slice::from_raw_parts(input_ptr, input_len);
    crate::hash64(input)
}

/// Compute the 32-bit fingerprint of a byte buffer.
///
/// Defined as the 64-bit fingerprint folded to 32 bits; same pointer
/// contract as [`farmhash64_hash64`].
///
/// # Safety
/// - A non-null `input_ptr` must be valid for `input_len` readable
///   bytes.
#[no_mangle]
pub unsafe extern "C" fn farmhash64_hash32(input_ptr: *const u8, input_len: usize) -> u32 {
    if input_ptr.is_null() || input_len == 0 {
        return crate::hash32(&[]);
    }
    let input = slice::from_raw_parts(input_ptr, input_len);
    crate::hash32(input)
}

/// Fold a 64-bit fingerprint into 32 bits.
///
/// Exported so bindings can derive 32-bit values from stored 64-bit
/// fingerprints without rehashing.
#[no_mangle]
pub extern "C" fn farmhash64_fold64_to_32(fingerprint: u64) -> u32 {
    crate::fold64_to_32(fingerprint)
}

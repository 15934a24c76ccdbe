//! Constant-time operations to prevent timing attacks
//!
//! The mask helpers return `0xFF` for "true" and `0x00` for "false" and are
//! computed with arithmetic only, so callers can combine them without
//! branching on secret data.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths (public) may cause an early return.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// All-ones mask when `x != 0`, all-zeros otherwise
#[inline(always)]
pub fn ct_nonzero_mask_u8(x: u8) -> u8 {
    // (x + 0xFF) carries into bit 8 exactly when x is non-zero
    let carry = ((x as u16 + 0xFF) >> 8) as u8;
    0u8.wrapping_sub(carry)
}

/// All-ones mask when `a == b`, all-zeros otherwise
#[inline(always)]
pub fn ct_eq_mask_u8(a: u8, b: u8) -> u8 {
    !ct_nonzero_mask_u8(a ^ b)
}

/// All-ones mask when `a < b`, all-zeros otherwise
#[inline(always)]
pub fn ct_lt_mask_u8(a: u8, b: u8) -> u8 {
    // the borrow out of a 16-bit subtraction lands in bit 15
    let borrow = ((a as u16).wrapping_sub(b as u16) >> 15) as u8;
    0u8.wrapping_sub(borrow)
}

/// OR together the byte-wise differences of two equal-length slices
///
/// The result is zero exactly when the slices are equal. Every byte is
/// visited regardless of where the first difference sits.
pub fn ct_diff_accumulate(a: &[u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y))
}

/// Turn an accumulated difference into a `Choice` that is 1 when it is zero
#[inline(always)]
pub fn ct_is_zero_choice(acc: u8) -> Choice {
    let nonzero = ct_nonzero_mask_u8(acc);
    Choice::from((!nonzero) & 1)
}

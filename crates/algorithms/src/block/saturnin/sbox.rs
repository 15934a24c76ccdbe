//! Bit-sliced S-box layer
//!
//! Each 8-word half of the state holds two nibble-slices: words `i..i+4`
//! go through sigma0 and words `i+4..i+8` through sigma1. Both share the
//! same AND/OR/XOR network and differ only in how the outputs are wired
//! back. No table lookups, no data-dependent branches.

use super::State;

#[inline(always)]
fn network(mut a: u16, mut b: u16, mut c: u16, mut d: u16) -> (u16, u16, u16, u16) {
    a ^= b & c;
    b ^= a | d;
    d ^= b | c;
    c ^= b & d;
    b ^= a | c;
    a ^= b | d;
    (a, b, c, d)
}

#[inline(always)]
fn network_inv(mut a: u16, mut b: u16, mut c: u16, mut d: u16) -> (u16, u16, u16, u16) {
    a ^= b | d;
    b ^= a | c;
    c ^= b & d;
    d ^= b | c;
    b ^= a | d;
    a ^= b & c;
    (a, b, c, d)
}

/// Apply sigma0 and sigma1 to both halves of the state
pub fn sbox(state: &mut State) {
    for i in [0, 8] {
        let (a, b, c, d) = network(state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = b;
        state[i + 1] = c;
        state[i + 2] = d;
        state[i + 3] = a;

        let (a, b, c, d) = network(state[i + 4], state[i + 5], state[i + 6], state[i + 7]);
        state[i + 4] = d;
        state[i + 5] = b;
        state[i + 6] = a;
        state[i + 7] = c;
    }
}

/// Inverse of [`sbox`]
pub fn sbox_inv(state: &mut State) {
    for i in [0, 8] {
        let (a, b, c, d) = network_inv(state[i + 3], state[i], state[i + 1], state[i + 2]);
        state[i] = a;
        state[i + 1] = b;
        state[i + 2] = c;
        state[i + 3] = d;

        let (a, b, c, d) = network_inv(state[i + 6], state[i + 5], state[i + 7], state[i + 4]);
        state[i + 4] = a;
        state[i + 5] = b;
        state[i + 6] = c;
        state[i + 7] = d;
    }
}

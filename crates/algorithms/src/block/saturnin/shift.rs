//! Slice and sheet permutations
//!
//! Both permutations leave words 0..4 alone and rotate the remaining three
//! groups of four words by amounts that grow with the group index. Even
//! super-rounds use the slice form, odd ones the sheet form.

use super::State;

#[inline(always)]
fn rotl_nibbles_1(w: u16) -> u16 {
    ((w & 0x7777) << 1) | ((w & 0x8888) >> 3)
}

#[inline(always)]
fn rotl_nibbles_2(w: u16) -> u16 {
    ((w & 0x3333) << 2) | ((w & 0xcccc) >> 2)
}

#[inline(always)]
fn rotl_nibbles_3(w: u16) -> u16 {
    ((w & 0x1111) << 3) | ((w & 0xeeee) >> 1)
}

/// Rotate each nibble of words 4..8 by 1, 8..12 by 2 and 12..16 by 3
pub fn slice(state: &mut State) {
    for i in 0..4 {
        state[4 + i] = rotl_nibbles_1(state[4 + i]);
        state[8 + i] = rotl_nibbles_2(state[8 + i]);
        state[12 + i] = rotl_nibbles_3(state[12 + i]);
    }
}

/// Inverse of [`slice`]
pub fn slice_inv(state: &mut State) {
    for i in 0..4 {
        state[4 + i] = rotl_nibbles_3(state[4 + i]);
        state[8 + i] = rotl_nibbles_2(state[8 + i]);
        state[12 + i] = rotl_nibbles_1(state[12 + i]);
    }
}

/// Rotate words 4..8 left by 4 bits, 8..12 by 8 and 12..16 by 12
pub fn sheet(state: &mut State) {
    for i in 0..4 {
        state[4 + i] = state[4 + i].rotate_left(4);
        state[8 + i] = state[8 + i].rotate_left(8);
        state[12 + i] = state[12 + i].rotate_left(12);
    }
}

/// Inverse of [`sheet`]
pub fn sheet_inv(state: &mut State) {
    for i in 0..4 {
        state[4 + i] = state[4 + i].rotate_left(12);
        state[8 + i] = state[8 + i].rotate_left(8);
        state[12 + i] = state[12 + i].rotate_left(4);
    }
}

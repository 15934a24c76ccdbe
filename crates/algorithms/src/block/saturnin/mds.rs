//! Linear mixing layer
//!
//! The state is read as four groups of four words, `A = x0..x3`,
//! `B = x4..x7`, `C = x8..x11` and `D = x12..x15`. The layer is a fixed
//! sequence of group XORs and applications of the nibble-wise multiplier
//! `α(t0, t1, t2, t3) = (t1, t2, t3, t0 ^ t1)`.

use super::State;

const A: usize = 0;
const B: usize = 4;
const C: usize = 8;
const D: usize = 12;

#[inline(always)]
fn xor_group(state: &mut State, dst: usize, src: usize) {
    for i in 0..4 {
        state[dst + i] ^= state[src + i];
    }
}

#[inline(always)]
fn alpha(state: &mut State, g: usize) {
    let t = state[g];
    state[g] = state[g + 1];
    state[g + 1] = state[g + 2];
    state[g + 2] = state[g + 3];
    state[g + 3] = t ^ state[g];
}

#[inline(always)]
fn alpha_inv(state: &mut State, g: usize) {
    let t = state[g + 3];
    state[g + 3] = state[g + 2];
    state[g + 2] = state[g + 1];
    state[g + 1] = state[g];
    state[g] = t ^ state[g + 1];
}

/// Forward MDS
pub fn mds(state: &mut State) {
    xor_group(state, C, D);
    xor_group(state, A, B);
    alpha(state, B);
    alpha(state, D);
    xor_group(state, B, C);
    xor_group(state, D, A);
    alpha(state, A);
    alpha(state, A);
    alpha(state, C);
    alpha(state, C);
    xor_group(state, C, D);
    xor_group(state, A, B);
    xor_group(state, B, C);
    xor_group(state, D, A);
}

/// Inverse MDS: the forward steps undone in reverse order
pub fn mds_inv(state: &mut State) {
    xor_group(state, B, C);
    xor_group(state, D, A);
    xor_group(state, C, D);
    xor_group(state, A, B);
    alpha_inv(state, A);
    alpha_inv(state, A);
    alpha_inv(state, C);
    alpha_inv(state, C);
    xor_group(state, B, C);
    xor_group(state, D, A);
    alpha_inv(state, B);
    alpha_inv(state, D);
    xor_group(state, C, D);
    xor_group(state, A, B);
}

//! Key addition

use super::State;

/// XOR the key words into the state
#[inline(always)]
pub fn add_key(key: &State, state: &mut State) {
    for (s, k) in state.iter_mut().zip(key.iter()) {
        *s ^= *k;
    }
}

/// XOR the rotated key words into the state
///
/// Each key word is rotated as `(k << 11) | (k >> 5)`.
#[inline(always)]
pub fn add_rotated_key(key: &State, state: &mut State) {
    for (s, k) in state.iter_mut().zip(key.iter()) {
        *s ^= k.rotate_left(11);
    }
}

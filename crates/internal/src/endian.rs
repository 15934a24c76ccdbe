//! Endianness utility functions
//!
//! Saturnin packs its 256-bit state and key as sixteen 16-bit words, byte
//! `2i` being the low byte and byte `2i + 1` the high byte of word `i`.

/// Convert a u16 from little-endian byte order to native byte order
#[inline(always)]
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 from native byte order to little-endian bytes
#[inline(always)]
pub fn u16_to_le_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Decode little-endian byte pairs into `words`
///
/// `bytes` must hold exactly two bytes per word.
#[inline]
pub fn load_u16_words_le(bytes: &[u8], words: &mut [u16]) {
    debug_assert_eq!(bytes.len(), words.len() * 2);
    for (word, pair) in words.iter_mut().zip(bytes.chunks_exact(2)) {
        *word = u16_from_le_bytes(pair);
    }
}

/// Encode `words` as little-endian byte pairs into `bytes`
///
/// `bytes` must hold exactly two bytes per word.
#[inline]
pub fn store_u16_words_le(words: &[u16], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), words.len() * 2);
    for (pair, word) in bytes.chunks_exact_mut(2).zip(words.iter()) {
        pair.copy_from_slice(&u16_to_le_bytes(*word));
    }
}

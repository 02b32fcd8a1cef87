//! Single-syllable codec: one `u16` to five letters and back.
//!
//! Bit layout, most significant first:
//!
//! ```text
//! 15..12  11..10  9..6  5..4  3..0
//!   C       V      C     V     C
//! ```
//!
//! # Example
//!
//! ```
//! use proquint::syllable;
//!
//! assert_eq!(syllable::encode(0x1234), "damuh");
//! assert_eq!(syllable::decode("damuh").unwrap(), 0x1234);
//! ```

use super::errors::DecodeError;
use crate::core::alphabet::{SYLLABLE_LEN, SYLLABLE_PATTERN};

/// Right-shift that brings each position's digit down to bit 0.
const SHIFTS: [u32; SYLLABLE_LEN] = [12, 10, 6, 4, 0];

/// Encodes a 16-bit value as a five-letter syllable.
pub fn encode(value: u16) -> String {
    let mut out = String::with_capacity(SYLLABLE_LEN);
    push(&mut out, value);
    out
}

/// Appends the syllable for `value` to `out`.
pub fn push(out: &mut String, value: u16) {
    for (kind, shift) in SYLLABLE_PATTERN.iter().zip(SHIFTS) {
        out.push(kind.letter(value >> shift));
    }
}

/// Decodes a five-letter syllable, ignoring ASCII case.
///
/// # Errors
///
/// - `DecodeError::InvalidLength` if the input is not exactly five characters
/// - `DecodeError::InvalidLetter` if a letter is outside the alphabet expected
///   at its position
pub fn decode(syllable: &str) -> Result<u16, DecodeError> {
    let actual = syllable.chars().count();
    if actual != SYLLABLE_LEN {
        return Err(DecodeError::InvalidLength { actual });
    }
    decode_letters(syllable.chars(), 0)
}

/// Decodes exactly five letters; `offset` is added to reported positions.
pub(crate) fn decode_letters(
    letters: impl IntoIterator<Item = char>,
    offset: usize,
) -> Result<u16, DecodeError> {
    let mut value = 0u16;
    for ((index, letter), kind) in letters.into_iter().enumerate().zip(SYLLABLE_PATTERN) {
        let digit = kind
            .value_of(letter)
            .ok_or(DecodeError::InvalidLetter {
                letter,
                position: offset + index,
                expected: kind,
            })?;
        value = (value << kind.bits()) | digit;
    }
    Ok(value)
}

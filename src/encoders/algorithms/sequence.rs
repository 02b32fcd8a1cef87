//! Fixed-width sequences of syllables.
//!
//! Multi-word integers are split into 16-bit chunks, most significant first,
//! and each chunk becomes one syllable. Signed integers are encoded through
//! their two's-complement bit pattern.
//!
//! # Example
//!
//! ```
//! use proquint::{decode_u32, encode_u32};
//!
//! assert_eq!(encode_u32(0x7F000001, true), "lusab-babad");
//! assert_eq!(encode_u32(0x7F000001, false), "lusabbabad");
//! assert_eq!(decode_u32("lusab-babad").unwrap(), 0x7F000001);
//! ```

use super::errors::DecodeError;
use super::syllable;
use crate::core::alphabet::SYLLABLE_LEN;

/// Separator placed between syllables.
pub const SEPARATOR: char = '-';

/// Encodes `chunks` in order, optionally separated by hyphens.
pub fn assemble(chunks: &[u16], hyphens: bool) -> String {
    let mut out = String::with_capacity(chunks.len() * (SYLLABLE_LEN + 1));
    for (i, &chunk) in chunks.iter().enumerate() {
        if hyphens && i > 0 {
            out.push(SEPARATOR);
        }
        syllable::push(&mut out, chunk);
    }
    out
}

/// Splits `input` into exactly `expected_chunks` decoded syllables.
///
/// Hyphens are optional, but when present they must separate every pair of
/// adjacent syllables and appear nowhere else.
///
/// # Errors
///
/// - `DecodeError::MalformedSeparators` if hyphens are present but some group
///   between them is not a whole syllable
/// - `DecodeError::WrongChunkCount` if the letter count is not
///   `5 * expected_chunks`
/// - any error from [`syllable::decode`]
pub fn split(input: &str, expected_chunks: usize) -> Result<Vec<u16>, DecodeError> {
    let expected = expected_chunks * SYLLABLE_LEN;

    if !input.contains(SEPARATOR) {
        let actual = input.chars().count();
        if actual != expected {
            return Err(DecodeError::WrongChunkCount { expected, actual });
        }
        let letters: Vec<char> = input.chars().collect();
        return letters
            .chunks_exact(SYLLABLE_LEN)
            .enumerate()
            .map(|(i, group)| syllable::decode_letters(group.iter().copied(), i * SYLLABLE_LEN))
            .collect();
    }

    let mut groups = Vec::with_capacity(expected_chunks);
    let mut position = 0;
    for group in input.split(SEPARATOR) {
        let len = group.chars().count();
        if len != SYLLABLE_LEN {
            // Point at the separator that closes (or should have closed) the group.
            let offending = if len < SYLLABLE_LEN {
                position + len
            } else {
                position + SYLLABLE_LEN
            };
            return Err(DecodeError::MalformedSeparators {
                position: offending,
            });
        }
        groups.push(group);
        position += len + 1;
    }

    if groups.len() != expected_chunks {
        return Err(DecodeError::WrongChunkCount {
            expected,
            actual: groups.len() * SYLLABLE_LEN,
        });
    }

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| syllable::decode_letters(group.chars(), i * SYLLABLE_LEN))
        .collect()
}

fn fold_chunks(chunks: &[u16]) -> u64 {
    chunks
        .iter()
        .fold(0u64, |acc, &chunk| (acc << 16) | u64::from(chunk))
}

/// Encodes a 16-bit value as one syllable.
pub fn encode_u16(value: u16) -> String {
    syllable::encode(value)
}

/// Encodes a signed 16-bit value through its bit pattern.
pub fn encode_i16(value: i16) -> String {
    syllable::encode(value as u16)
}

/// Encodes a 32-bit value as two syllables.
pub fn encode_u32(value: u32, hyphens: bool) -> String {
    assemble(&[(value >> 16) as u16, value as u16], hyphens)
}

/// Encodes a signed 32-bit value through its bit pattern.
pub fn encode_i32(value: i32, hyphens: bool) -> String {
    encode_u32(value as u32, hyphens)
}

/// Encodes a 64-bit value as four syllables.
pub fn encode_u64(value: u64, hyphens: bool) -> String {
    assemble(
        &[
            (value >> 48) as u16,
            (value >> 32) as u16,
            (value >> 16) as u16,
            value as u16,
        ],
        hyphens,
    )
}

/// Encodes a signed 64-bit value through its bit pattern.
pub fn encode_i64(value: i64, hyphens: bool) -> String {
    encode_u64(value as u64, hyphens)
}

/// Decodes a single syllable.
pub fn decode_u16(input: &str) -> Result<u16, DecodeError> {
    syllable::decode(input)
}

/// Decodes a single syllable as a signed value.
pub fn decode_i16(input: &str) -> Result<i16, DecodeError> {
    decode_u16(input).map(|v| v as i16)
}

/// Decodes two syllables, with or without a separating hyphen.
pub fn decode_u32(input: &str) -> Result<u32, DecodeError> {
    split(input, 2).map(|chunks| fold_chunks(&chunks) as u32)
}

/// Decodes two syllables as a signed value.
pub fn decode_i32(input: &str) -> Result<i32, DecodeError> {
    decode_u32(input).map(|v| v as i32)
}

/// Decodes four syllables, with or without separating hyphens.
pub fn decode_u64(input: &str) -> Result<u64, DecodeError> {
    split(input, 4).map(|chunks| fold_chunks(&chunks))
}

/// Decodes four syllables as a signed value.
pub fn decode_i64(input: &str) -> Result<i64, DecodeError> {
    decode_u64(input).map(|v| v as i64)
}

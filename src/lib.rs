//! Proquint encoding: binary data as pronounceable five-letter syllables.
//!
//! Each syllable alternates consonant and vowel (`CVCVC`) and carries 16 bits,
//! so `127.0.0.1` reads as `lusab-babad`. Decoding is case-insensitive and
//! validates hyphen placement strictly.
//!
//! # Example
//!
//! ```
//! use proquint::{decode_bytes, encode_bytes, DecodeOptions, EncodeOptions, PaddingMode};
//!
//! let options = EncodeOptions::new(true, PaddingMode::HyphenTerminator);
//! let quint = encode_bytes(&[127, 0, 0, 1], options).unwrap();
//! assert_eq!(quint, "lusab-babad");
//!
//! let bytes = decode_bytes(&quint, DecodeOptions::default()).unwrap();
//! assert_eq!(bytes, vec![127, 0, 0, 1]);
//! ```

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{CONSONANTS, LetterKind, SYLLABLE_LEN, SYLLABLE_PATTERN, VOWELS};
pub use crate::core::config::{
    DecodeLayer, DecodeOptions, DecodeSettings, EncodeLayer, EncodeOptions, EncodeSettings,
    PaddingMode, Settings, SettingsLayer,
};
pub use crate::encoders::algorithms::{DecodeError, EncodeError, ErrorKind, HexError};
pub use crate::encoders::hex_string::{decode_hex, encode_hex};
pub use crate::encoders::{sequence, syllable};
pub use crate::encoders::sequence::{
    decode_i16, decode_i32, decode_i64, decode_u16, decode_u32, decode_u64, encode_i16,
    encode_i32, encode_i64, encode_u16, encode_u32, encode_u64,
};

/// Encodes arbitrary bytes as proquint text.
///
/// See [`PaddingMode`] for how odd-length input is handled.
pub fn encode_bytes(data: &[u8], options: EncodeOptions) -> Result<String, EncodeError> {
    encoders::bytes::encode(data, options)
}

/// Decodes proquint text to bytes, validating hyphen placement first.
pub fn decode_bytes(input: &str, options: DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    encoders::bytes::decode(input, options)
}

//! Arbitrary-length byte encoding with padding.
//!
//! A syllable carries two bytes, so odd-length input is padded with one zero
//! byte. The [`PaddingMode`] decides how that byte is signalled:
//!
//! - `HyphenTerminator`: the output ends with a hyphen (`bahaf-basab-`). On
//!   decode the final byte is stripped only when that hyphen is present, so a
//!   genuine trailing zero survives.
//! - `LegacyBareZero`: no marker. On decode any final zero byte is stripped,
//!   which makes `[1, 2, 3]` and `[1, 2, 3, 0]` indistinguishable.
//! - `Disabled`: odd-length input is rejected.
//!
//! Decoding validates hyphen placement before any letter is looked at.
//!
//! # Example
//!
//! ```
//! use proquint::{decode_bytes, encode_bytes, DecodeOptions, EncodeOptions};
//!
//! let options = EncodeOptions::default().with_hyphens(true);
//! assert_eq!(encode_bytes(&[127, 0, 0, 1], options).unwrap(), "lusab-babad");
//! assert_eq!(encode_bytes(&[1, 2, 3], options).unwrap(), "bahaf-basab-");
//!
//! let decoded = decode_bytes("bahaf-basab-", DecodeOptions::default()).unwrap();
//! assert_eq!(decoded, vec![1, 2, 3]);
//! ```

use std::borrow::Cow;

use super::errors::{DecodeError, EncodeError};
use super::sequence::SEPARATOR;
use super::syllable;
use crate::core::alphabet::SYLLABLE_LEN;
use crate::core::config::{DecodeOptions, EncodeOptions, PaddingMode};

/// Byte appended to odd-length input.
pub const PADDING_BYTE: u8 = 0x00;

/// Encodes `data` as proquint text.
///
/// # Errors
///
/// Returns `EncodeError::OddLength` if `data` has odd length and padding is
/// disabled.
pub fn encode(data: &[u8], options: EncodeOptions) -> Result<String, EncodeError> {
    let padded = data.len() % 2 == 1;
    if padded && options.padding == PaddingMode::Disabled {
        return Err(EncodeError::OddLength { length: data.len() });
    }

    let words: Vec<u16> = data
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(PADDING_BYTE)]))
        .collect();

    let mut out = super::sequence::assemble(&words, options.hyphens);
    if padded && options.padding == PaddingMode::HyphenTerminator {
        out.push(SEPARATOR);
    }
    Ok(out)
}

/// Decodes proquint text to bytes.
///
/// Validation runs in this order, stopping at the first failure:
///
/// 1. leading hyphen
/// 2. consecutive hyphens (runs are collapsed instead in legacy mode)
/// 3. one trailing hyphen is taken as the padding marker and removed
/// 4. hyphen placement: if any hyphen remains, it must sit at every sixth
///    character and nowhere else
/// 5. empty input, then letter count a multiple of five
/// 6. each syllable, case-insensitively
/// 7. padding resolution on the final byte
pub fn decode(input: &str, options: DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    if input.starts_with(SEPARATOR) {
        return Err(DecodeError::LeadingHyphen);
    }

    let text = match options.padding {
        PaddingMode::LegacyBareZero => collapse_hyphen_runs(input),
        _ => {
            reject_consecutive_hyphens(input)?;
            Cow::Borrowed(input)
        }
    };

    let (body, has_final_hyphen) = match text.strip_suffix(SEPARATOR) {
        Some(body) => (body, true),
        None => (&*text, false),
    };

    check_hyphen_placement(body)?;

    let letters: Vec<char> = body.chars().filter(|&c| c != SEPARATOR).collect();
    if letters.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if letters.len() % SYLLABLE_LEN != 0 {
        return Err(DecodeError::LengthNotMultipleOfFive {
            actual: letters.len(),
        });
    }

    let mut bytes = Vec::with_capacity(letters.len() / SYLLABLE_LEN * 2);
    for (i, group) in letters.chunks_exact(SYLLABLE_LEN).enumerate() {
        let word = syllable::decode_letters(group.iter().copied(), i * SYLLABLE_LEN)?;
        bytes.extend_from_slice(&word.to_be_bytes());
    }

    strip_padding(&mut bytes, options.padding, has_final_hyphen)?;
    Ok(bytes)
}

fn reject_consecutive_hyphens(input: &str) -> Result<(), DecodeError> {
    let mut previous = None;
    for (position, c) in input.chars().enumerate() {
        if c == SEPARATOR && previous == Some(SEPARATOR) {
            return Err(DecodeError::ConsecutiveHyphens { position });
        }
        previous = Some(c);
    }
    Ok(())
}

fn collapse_hyphen_runs(input: &str) -> Cow<'_, str> {
    if !input.contains("--") {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == SEPARATOR && out.ends_with(SEPARATOR) {
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// With any hyphen present, positions 5, 11, 17, ... must be hyphens and no
/// other position may be.
fn check_hyphen_placement(body: &str) -> Result<(), DecodeError> {
    if !body.contains(SEPARATOR) {
        return Ok(());
    }
    for (position, c) in body.chars().enumerate() {
        let boundary = position % (SYLLABLE_LEN + 1) == SYLLABLE_LEN;
        if boundary != (c == SEPARATOR) {
            return Err(DecodeError::MisplacedHyphen { position });
        }
    }
    Ok(())
}

fn strip_padding(
    bytes: &mut Vec<u8>,
    mode: PaddingMode,
    has_final_hyphen: bool,
) -> Result<(), DecodeError> {
    match mode {
        PaddingMode::HyphenTerminator if has_final_hyphen => match bytes.last() {
            Some(&PADDING_BYTE) => {
                bytes.pop();
                Ok(())
            }
            Some(&final_byte) => Err(DecodeError::InconsistentPadding { final_byte }),
            None => Err(DecodeError::EmptyInput),
        },
        PaddingMode::HyphenTerminator => Ok(()),
        PaddingMode::LegacyBareZero => {
            if bytes.last() == Some(&PADDING_BYTE) {
                bytes.pop();
            }
            Ok(())
        }
        PaddingMode::Disabled if has_final_hyphen => Err(DecodeError::UnexpectedPaddingMarker),
        PaddingMode::Disabled => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYPHEN: DecodeOptions = DecodeOptions::new(PaddingMode::HyphenTerminator);
    const LEGACY: DecodeOptions = DecodeOptions::new(PaddingMode::LegacyBareZero);
    const DISABLED: DecodeOptions = DecodeOptions::new(PaddingMode::Disabled);

    fn with_hyphens(padding: PaddingMode) -> EncodeOptions {
        EncodeOptions::new(true, padding)
    }

    #[test]
    fn test_encode_even_length() {
        assert_eq!(
            encode(&[127, 0, 0, 1], EncodeOptions::default()).unwrap(),
            "lusabbabad"
        );
        assert_eq!(
            encode(&[127, 0, 0, 1], with_hyphens(PaddingMode::Disabled)).unwrap(),
            "lusab-babad"
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[], EncodeOptions::default()).unwrap(), "");
        assert_eq!(encode(&[], with_hyphens(PaddingMode::Disabled)).unwrap(), "");
    }

    #[test]
    fn test_encode_genuine_trailing_zero() {
        assert_eq!(
            encode(&[1, 2, 3, 0], with_hyphens(PaddingMode::HyphenTerminator)).unwrap(),
            "bahaf-basab"
        );
    }

    #[test]
    fn test_encode_padding_modes() {
        assert_eq!(
            encode(&[1, 2, 3], with_hyphens(PaddingMode::HyphenTerminator)).unwrap(),
            "bahaf-basab-"
        );
        assert_eq!(
            encode(&[1, 2, 3], EncodeOptions::default()).unwrap(),
            "bahafbasab-"
        );
        assert_eq!(
            encode(&[1, 2, 3], with_hyphens(PaddingMode::LegacyBareZero)).unwrap(),
            "bahaf-basab"
        );
        assert_eq!(
            encode(&[1, 2, 3], with_hyphens(PaddingMode::Disabled)),
            Err(EncodeError::OddLength { length: 3 })
        );
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(
            encode(&[0x7F], with_hyphens(PaddingMode::HyphenTerminator)).unwrap(),
            "lusab-"
        );
    }

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode("lusab-babad", HYPHEN).unwrap(), vec![127, 0, 0, 1]);
        assert_eq!(decode("lusabbabad", HYPHEN).unwrap(), vec![127, 0, 0, 1]);
        assert_eq!(decode("babab", HYPHEN).unwrap(), vec![0x00, 0x00]);
        assert_eq!(
            decode("KIVAF-DAMUR", HYPHEN).unwrap(),
            vec![0x67, 0x82, 0x12, 0x3b]
        );
    }

    #[test]
    fn test_decode_hyphen_terminator() {
        assert_eq!(decode("bahaf-basab-", HYPHEN).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("bahafbasab-", HYPHEN).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("bahaf-basab", HYPHEN).unwrap(), vec![1, 2, 3, 0]);
        assert_eq!(decode("lusab-", HYPHEN).unwrap(), vec![0x7F]);
        assert_eq!(
            decode("bahaf-basad-", HYPHEN),
            Err(DecodeError::InconsistentPadding { final_byte: 0x01 })
        );
    }

    #[test]
    fn test_decode_legacy_strips_any_final_zero() {
        assert_eq!(decode("bahaf-basab", LEGACY).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("bahaf-basab-", LEGACY).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("bahaf-basad", LEGACY).unwrap(), vec![1, 2, 3, 1]);
        // Only one byte goes, even when the one before is also zero.
        assert_eq!(decode("babab", LEGACY).unwrap(), vec![0]);
    }

    #[test]
    fn test_decode_legacy_tolerates_consecutive_hyphens() {
        assert_eq!(decode("bahaf--basab", LEGACY).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("bahaf-basab--", LEGACY).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("--bahaf", LEGACY), Err(DecodeError::LeadingHyphen));
        assert_eq!(
            decode("kiva--fdamur", LEGACY),
            Err(DecodeError::MisplacedHyphen { position: 4 })
        );
    }

    #[test]
    fn test_decode_disabled() {
        assert_eq!(decode("bahaf-basab", DISABLED).unwrap(), vec![1, 2, 3, 0]);
        assert_eq!(
            decode("bahaf-basab-", DISABLED),
            Err(DecodeError::UnexpectedPaddingMarker)
        );
    }

    #[test]
    fn test_decode_hyphen_errors() {
        assert_eq!(decode("-bahaf-basab", HYPHEN), Err(DecodeError::LeadingHyphen));
        assert_eq!(decode("-", HYPHEN), Err(DecodeError::LeadingHyphen));
        assert_eq!(
            decode("bahaf--basab", HYPHEN),
            Err(DecodeError::ConsecutiveHyphens { position: 6 })
        );
        assert_eq!(
            decode("bahaf-basab--", HYPHEN),
            Err(DecodeError::ConsecutiveHyphens { position: 12 })
        );
        assert_eq!(
            decode("kiva-fdamur", HYPHEN),
            Err(DecodeError::MisplacedHyphen { position: 4 })
        );
        assert_eq!(
            decode("kivaf-damurzabalhilup", HYPHEN),
            Err(DecodeError::MisplacedHyphen { position: 11 })
        );
        assert_eq!(
            decode("kivafdamur-zabalhilup", HYPHEN),
            Err(DecodeError::MisplacedHyphen { position: 5 })
        );
        assert_eq!(
            decode("kivaf-damur-zabalhilup", HYPHEN),
            Err(DecodeError::MisplacedHyphen { position: 17 })
        );
        assert!(matches!(
            decode("k-i-v-a-f-d-a-m-u-r-z-a-b-a-l-h-i-l-u-p", HYPHEN),
            Err(DecodeError::MisplacedHyphen { .. })
        ));
    }

    #[test]
    fn test_decode_shape_errors() {
        assert_eq!(decode("", HYPHEN), Err(DecodeError::EmptyInput));
        assert_eq!(decode("", LEGACY), Err(DecodeError::EmptyInput));
        assert_eq!(
            decode("bahaf-basa", HYPHEN),
            Err(DecodeError::LengthNotMultipleOfFive { actual: 9 })
        );
        assert_eq!(
            decode("bahafbasabz", HYPHEN),
            Err(DecodeError::LengthNotMultipleOfFive { actual: 11 })
        );
    }

    #[test]
    fn test_decode_letter_errors() {
        // Position counts letters only, hyphens excluded.
        assert!(matches!(
            decode("bahaf-baXsa", HYPHEN),
            Err(DecodeError::InvalidLetter {
                letter: 'X',
                position: 7,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_whitespace() {
        assert!(matches!(
            decode("bahaf basab", HYPHEN),
            Err(DecodeError::LengthNotMultipleOfFive { .. })
        ));
        assert!(matches!(
            decode("bahaf basa", HYPHEN),
            Err(DecodeError::InvalidLetter { letter: ' ', .. })
        ));
    }

    #[test]
    fn test_collapse_hyphen_runs() {
        assert_eq!(collapse_hyphen_runs("a--b---c"), "a-b-c");
        assert!(matches!(collapse_hyphen_runs("a-b"), Cow::Borrowed(_)));
    }
}

use std::fmt;

use crate::core::alphabet::LetterKind;

/// Broad class of a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The overall shape of the input cannot be interpreted.
    Structural,
    /// A syllable has the wrong size or an out-of-alphabet letter.
    Lexical,
    /// Hyphen placement violates the grammar.
    Syntactic,
    /// A padding marker disagrees with the data it marks.
    Semantic,
}

/// Errors that can occur during decoding.
///
/// Positions are zero-based character offsets. For `InvalidLetter` the offset
/// counts letters only, with hyphens removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A single syllable is not exactly five characters long
    InvalidLength { actual: usize },
    /// A letter is not valid at its position in the syllable
    InvalidLetter {
        letter: char,
        position: usize,
        expected: LetterKind,
    },
    /// A fixed-width value has the wrong number of letters
    WrongChunkCount { expected: usize, actual: usize },
    /// Separators of a fixed-width value are present but not between every syllable
    MalformedSeparators { position: usize },
    /// The input starts with a hyphen
    LeadingHyphen,
    /// Two hyphens are adjacent
    ConsecutiveHyphens { position: usize },
    /// A hyphen sits inside a syllable, or a syllable boundary lacks one
    MisplacedHyphen { position: usize },
    /// Nothing left to decode once hyphens are removed
    EmptyInput,
    /// The letter count is not a multiple of five
    LengthNotMultipleOfFive { actual: usize },
    /// A trailing padding hyphen marks a final byte that is not zero
    InconsistentPadding { final_byte: u8 },
    /// A trailing padding hyphen was found but padding is disabled
    UnexpectedPaddingMarker,
}

impl DecodeError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::WrongChunkCount { .. }
            | DecodeError::EmptyInput
            | DecodeError::LengthNotMultipleOfFive { .. } => ErrorKind::Structural,
            DecodeError::InvalidLength { .. } | DecodeError::InvalidLetter { .. } => {
                ErrorKind::Lexical
            }
            DecodeError::LeadingHyphen
            | DecodeError::ConsecutiveHyphens { .. }
            | DecodeError::MisplacedHyphen { .. }
            | DecodeError::MalformedSeparators { .. } => ErrorKind::Syntactic,
            DecodeError::InconsistentPadding { .. } | DecodeError::UnexpectedPaddingMarker => {
                ErrorKind::Semantic
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength { actual } => {
                write!(f, "invalid syllable: expected 5 characters, got {}", actual)
            }
            DecodeError::InvalidLetter {
                letter,
                position,
                expected,
            } => write!(
                f,
                "invalid letter '{}' at position {} (expected a {})",
                letter, position, expected
            ),
            DecodeError::WrongChunkCount { expected, actual } => write!(
                f,
                "wrong number of letters: expected {} ({} syllables), got {}",
                expected,
                expected / 5,
                actual
            ),
            DecodeError::MalformedSeparators { position } => write!(
                f,
                "malformed separators at position {}: hyphens must appear between every syllable or not at all",
                position
            ),
            DecodeError::LeadingHyphen => write!(f, "input must not start with a hyphen"),
            DecodeError::ConsecutiveHyphens { position } => {
                write!(f, "consecutive hyphens at position {}", position)
            }
            DecodeError::MisplacedHyphen { position } => write!(
                f,
                "misplaced hyphen at position {}: hyphens may only separate whole syllables",
                position
            ),
            DecodeError::EmptyInput => write!(f, "cannot decode empty input"),
            DecodeError::LengthNotMultipleOfFive { actual } => write!(
                f,
                "invalid length: {} letters is not a multiple of 5",
                actual
            ),
            DecodeError::InconsistentPadding { final_byte } => write!(
                f,
                "inconsistent padding: trailing hyphen marks padding but final byte is {:#04x}",
                final_byte
            ),
            DecodeError::UnexpectedPaddingMarker => {
                write!(f, "trailing padding hyphen found but padding is disabled")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Odd-length input while padding is disabled
    OddLength { length: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::OddLength { length } => write!(
                f,
                "cannot encode {} bytes: only even lengths are supported without padding",
                length
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

impl EncodeError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::OddLength { .. } => ErrorKind::Structural,
        }
    }
}

/// Errors from the hex string adapters.
#[derive(Debug)]
pub enum HexError {
    /// The hex text itself is malformed
    Hex(hex::FromHexError),
    Encode(EncodeError),
    Decode(DecodeError),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::Hex(e) => write!(f, "invalid hex input: {}", e),
            HexError::Encode(e) => write!(f, "{}", e),
            HexError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for HexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HexError::Hex(e) => Some(e),
            HexError::Encode(e) => Some(e),
            HexError::Decode(e) => Some(e),
        }
    }
}

impl From<hex::FromHexError> for HexError {
    fn from(e: hex::FromHexError) -> Self {
        HexError::Hex(e)
    }
}

impl From<EncodeError> for HexError {
    fn from(e: EncodeError) -> Self {
        HexError::Encode(e)
    }
}

impl From<DecodeError> for HexError {
    fn from(e: DecodeError) -> Self {
        HexError::Decode(e)
    }
}

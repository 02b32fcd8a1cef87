//! Hex string adapters around the byte codec.

use super::algorithms::bytes;
use super::algorithms::errors::HexError;
use crate::core::config::{DecodeOptions, EncodeOptions};

/// Encodes the bytes spelled by a hex string.
///
/// Surrounding whitespace is ignored; both letter cases are accepted.
///
/// # Example
///
/// ```
/// use proquint::{encode_hex, EncodeOptions};
///
/// let quint = encode_hex("6782123b", EncodeOptions::default().with_hyphens(true)).unwrap();
/// assert_eq!(quint, "kivaf-damur");
/// ```
pub fn encode_hex(input: &str, options: EncodeOptions) -> Result<String, HexError> {
    let data = hex::decode(input.trim())?;
    Ok(bytes::encode(&data, options)?)
}

/// Decodes proquint text and renders the bytes as lowercase hex.
pub fn decode_hex(input: &str, options: DecodeOptions) -> Result<String, HexError> {
    let data = bytes::decode(input, options)?;
    Ok(hex::encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PaddingMode;

    #[test]
    fn test_encode_hex() {
        let options = EncodeOptions::default().with_hyphens(true);
        assert_eq!(encode_hex("6782123b", options).unwrap(), "kivaf-damur");
        assert_eq!(encode_hex("6782123B\n", options).unwrap(), "kivaf-damur");
        assert_eq!(encode_hex("010203", options).unwrap(), "bahaf-basab-");
    }

    #[test]
    fn test_encode_hex_invalid() {
        let options = EncodeOptions::default();
        assert!(matches!(encode_hex("invalid", options), Err(HexError::Hex(_))));
        assert!(matches!(encode_hex("abc", options), Err(HexError::Hex(_))));
    }

    #[test]
    fn test_encode_hex_odd_bytes_without_padding() {
        let options = EncodeOptions::new(false, PaddingMode::Disabled);
        assert!(matches!(encode_hex("010203", options), Err(HexError::Encode(_))));
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(
            decode_hex("kivaf-damur", DecodeOptions::default()).unwrap(),
            "6782123b"
        );
        assert_eq!(
            decode_hex("bahaf-basab-", DecodeOptions::default()).unwrap(),
            "010203"
        );
        assert!(matches!(
            decode_hex("-kivaf", DecodeOptions::default()),
            Err(HexError::Decode(_))
        ));
    }
}

//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use proquint::prelude::*;
//!
//! let quint = encode_u32(0x7F000001, true);
//! assert_eq!(decode_bytes(&quint, DecodeOptions::default()).unwrap(), vec![127, 0, 0, 1]);
//! ```

pub use crate::{
    DecodeError,
    DecodeOptions,
    EncodeError,
    EncodeOptions,
    PaddingMode,

    // Byte codec
    decode_bytes,
    encode_bytes,

    // Hex adapters
    decode_hex,
    encode_hex,

    // Fixed-width integers
    decode_u16,
    decode_u32,
    decode_u64,
    encode_u16,
    encode_u32,
    encode_u64,
};

pub mod bytes;
pub mod errors;
pub mod sequence;
pub mod syllable;

// Re-export error types for public API
pub use errors::{DecodeError, EncodeError, ErrorKind, HexError};

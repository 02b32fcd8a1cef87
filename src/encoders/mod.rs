pub mod algorithms;
pub mod hex_string;

// Re-export commonly used items
pub use algorithms::{bytes, sequence, syllable};

use clap::{Args, Subcommand, ValueEnum};
use proquint::PaddingMode;
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Read the input as a hex string instead of raw bytes
    #[arg(short = 'x', long)]
    pub hex: bool,

    #[command(flatten)]
    pub hyphens: HyphenArgs,

    /// Padding convention for odd-length input
    #[arg(short = 'p', long, value_enum)]
    pub padding: Option<PaddingArg>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Write the decoded bytes as a hex string
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Padding convention used to interpret the final byte
    #[arg(short = 'p', long, value_enum)]
    pub padding: Option<PaddingArg>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for encoding an integer
#[derive(Args, Debug)]
pub struct IntArgs {
    /// Value to encode: decimal, or hexadecimal with a 0x prefix
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Integer width in bits
    #[arg(short = 'w', long, value_enum, default_value = "32")]
    pub width: Width,

    /// Treat the value as signed (two's complement)
    #[arg(short = 's', long)]
    pub signed: bool,

    #[command(flatten)]
    pub hyphens: HyphenArgs,
}

/// Arguments for decoding an integer
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Proquint text with one, two or four syllables
    pub quint: String,

    /// Integer width in bits
    #[arg(short = 'w', long, value_enum, default_value = "32")]
    pub width: Width,

    /// Interpret the bit pattern as signed (two's complement)
    #[arg(short = 's', long)]
    pub signed: bool,
}

/// Hyphen switches shared by the encoding commands
#[derive(Args, Debug)]
pub struct HyphenArgs {
    /// Separate syllables with hyphens
    #[arg(long, overrides_with = "no_hyphens")]
    pub hyphens: bool,

    /// Write syllables without separators
    #[arg(long, overrides_with = "hyphens")]
    pub no_hyphens: bool,
}

impl HyphenArgs {
    /// The explicit choice on the command line, if any.
    pub fn resolve(&self) -> Option<bool> {
        match (self.hyphens, self.no_hyphens) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Padding conventions (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PaddingArg {
    #[value(alias = "none")]
    Disabled,
    #[value(alias = "hyphen")]
    HyphenTerminator,
    #[value(alias = "legacy")]
    LegacyBareZero,
}

impl From<PaddingArg> for PaddingMode {
    fn from(cli: PaddingArg) -> Self {
        match cli {
            PaddingArg::Disabled => PaddingMode::Disabled,
            PaddingArg::HyphenTerminator => PaddingMode::HyphenTerminator,
            PaddingArg::LegacyBareZero => PaddingMode::LegacyBareZero,
        }
    }
}

/// Supported integer widths
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings after all overrides
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

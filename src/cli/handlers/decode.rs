use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    handlers::{read_text_input, write_bytes, write_text},
};
use proquint::Settings;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text_input(args.file.as_ref(), global)?;
    let text = text.trim();

    let mut options = settings.decode_options();
    if let Some(padding) = args.padding {
        options = proquint::DecodeOptions::new(padding.into());
    }
    tracing::debug!(chars = text.len(), padding = %options.padding, "decoding");

    if args.hex {
        let decoded = proquint::decode_hex(text, options)?;
        write_text(args.output.as_ref(), &decoded)
    } else {
        let decoded = proquint::decode_bytes(text, options)?;
        write_bytes(args.output.as_ref(), &decoded)
    }
}

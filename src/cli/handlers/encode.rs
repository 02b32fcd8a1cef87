use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    handlers::{read_input, write_text},
};
use proquint::Settings;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global)?;

    let mut options = settings.encode_options();
    if let Some(hyphens) = args.hyphens.resolve() {
        options = options.with_hyphens(hyphens);
    }
    if let Some(padding) = args.padding {
        options = options.with_padding(padding.into());
    }

    let encoded = if args.hex {
        let text = String::from_utf8(data).map_err(|_| "Hex input is not valid UTF-8 text")?;
        tracing::debug!(chars = text.trim().len(), hyphens = options.hyphens, padding = %options.padding, "encoding hex input");
        proquint::encode_hex(&text, options)?
    } else {
        tracing::debug!(bytes = data.len(), hyphens = options.hyphens, padding = %options.padding, "encoding");
        proquint::encode_bytes(&data, options)?
    };

    write_text(args.output.as_ref(), &encoded)
}

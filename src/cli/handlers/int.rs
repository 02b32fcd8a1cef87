use crate::cli::args::{IntArgs, Width};
use proquint::Settings;

pub fn handle(args: IntArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_integer(&args.value)?;
    let hyphens = args.hyphens.resolve().unwrap_or(settings.encode.hyphens);

    let out_of_range = || {
        format!(
            "Value {} is out of range for a {} {}-bit integer",
            args.value,
            if args.signed { "signed" } else { "unsigned" },
            args.width.bits()
        )
    };

    let encoded = match (args.width, args.signed) {
        (Width::W16, false) => proquint::encode_u16(u16::try_from(value).map_err(|_| out_of_range())?),
        (Width::W16, true) => proquint::encode_i16(i16::try_from(value).map_err(|_| out_of_range())?),
        (Width::W32, false) => {
            proquint::encode_u32(u32::try_from(value).map_err(|_| out_of_range())?, hyphens)
        }
        (Width::W32, true) => {
            proquint::encode_i32(i32::try_from(value).map_err(|_| out_of_range())?, hyphens)
        }
        (Width::W64, false) => {
            proquint::encode_u64(u64::try_from(value).map_err(|_| out_of_range())?, hyphens)
        }
        (Width::W64, true) => {
            proquint::encode_i64(i64::try_from(value).map_err(|_| out_of_range())?, hyphens)
        }
    };

    println!("{}", encoded);
    Ok(())
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer, with an optional sign.
fn parse_integer(input: &str) -> Result<i128, String> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(hex, 16),
        None => digits.parse::<i128>(),
    }
    .map_err(|_| format!("Invalid integer '{}'", input))?;

    Ok(if negative { -magnitude } else { magnitude })
}

use crate::cli::args::{ParseArgs, Width};

pub fn handle(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.quint.trim();

    let value: i128 = match (args.width, args.signed) {
        (Width::W16, false) => proquint::decode_u16(text)?.into(),
        (Width::W16, true) => proquint::decode_i16(text)?.into(),
        (Width::W32, false) => proquint::decode_u32(text)?.into(),
        (Width::W32, true) => proquint::decode_i32(text)?.into(),
        (Width::W64, false) => proquint::decode_u64(text)?.into(),
        (Width::W64, true) => proquint::decode_i64(text)?.into(),
    };

    println!("{}", value);
    Ok(())
}

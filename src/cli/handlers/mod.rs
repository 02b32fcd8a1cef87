pub mod config;
pub mod decode;
pub mod encode;
pub mod int;
pub mod parse;

use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads the whole input from `file` or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > global.max_size {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Use --max-size 0 to disable the limit.",
                    file_size, global.max_size
                )
                .into());
            }
        }
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes)",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Reads the input as text for the decoding commands.
pub fn read_text_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file, global)?;
    String::from_utf8(data).map_err(|_| "Input data is not valid UTF-8 text for decoding".into())
}

/// Writes a line of text to `output`, or prints it.
pub fn write_text(output: Option<&PathBuf>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, text.as_bytes())?,
        None => println!("{}", text),
    }
    Ok(())
}

/// Writes raw bytes to `output` or stdout.
pub fn write_bytes(output: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

use crate::cli::args::ConfigAction;
use proquint::Settings;

pub fn handle(action: ConfigAction, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(settings)?);
            } else {
                println!("[encode]");
                println!("hyphens = {}", settings.encode.hyphens);
                println!("padding = \"{}\"", settings.encode.padding);
                println!();
                println!("[decode]");
                println!("padding = \"{}\"", settings.decode.padding);
            }
        }
    }
    Ok(())
}

use crate::cli::global::GlobalArgs;
use proquint::{Settings, SettingsLayer};
use std::path::Path;

/// Loads the layered settings, then applies `--config` on top.
///
/// Unlike the standard locations, an explicit file that cannot be read or
/// parsed is an error.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let layer = SettingsLayer::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        settings.merge(layer);
        tracing::debug!(path = %expanded, "applied configuration layer");
    }

    tracing::debug!(
        encode.hyphens = settings.encode.hyphens,
        encode.padding = %settings.encode.padding,
        decode.padding = %settings.decode.padding,
        "effective settings"
    );

    Ok(settings)
}

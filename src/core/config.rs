use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How odd-length input is padded on encode and how padding is recognised on decode.
///
/// The two historical conventions are mutually exclusive, so they share a
/// single tag rather than independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingMode {
    /// No padding. Odd-length input cannot be encoded; nothing is stripped on decode.
    #[serde(alias = "none")]
    Disabled,
    /// Append a zero byte and signal it with a trailing hyphen (`bahaf-basab-`).
    #[default]
    #[serde(alias = "hyphen")]
    HyphenTerminator,
    /// Append a zero byte with no marker; any final zero byte is stripped on decode.
    ///
    /// Genuine trailing zero data cannot be told apart from padding in this mode.
    #[serde(alias = "legacy")]
    LegacyBareZero,
}

impl PaddingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddingMode::Disabled => "disabled",
            PaddingMode::HyphenTerminator => "hyphen_terminator",
            PaddingMode::LegacyBareZero => "legacy_bare_zero",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaddingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "disabled" | "none" => Ok(PaddingMode::Disabled),
            "hyphen_terminator" | "hyphen" => Ok(PaddingMode::HyphenTerminator),
            "legacy_bare_zero" | "legacy" => Ok(PaddingMode::LegacyBareZero),
            _ => Err(format!(
                "unknown padding mode '{}' (expected disabled, hyphen_terminator or legacy_bare_zero)",
                s
            )),
        }
    }
}

/// Options for [`encode_bytes`](crate::encode_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Insert a hyphen between syllables
    pub hyphens: bool,
    /// Padding convention for odd-length input
    pub padding: PaddingMode,
}

impl EncodeOptions {
    pub const fn new(hyphens: bool, padding: PaddingMode) -> Self {
        Self { hyphens, padding }
    }

    pub const fn with_hyphens(self, hyphens: bool) -> Self {
        Self { hyphens, ..self }
    }

    pub const fn with_padding(self, padding: PaddingMode) -> Self {
        Self { padding, ..self }
    }
}

/// Options for [`decode_bytes`](crate::decode_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Padding convention used to interpret the final byte
    pub padding: PaddingMode,
}

impl DecodeOptions {
    pub const fn new(padding: PaddingMode) -> Self {
        Self { padding }
    }
}

/// Encoding defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EncodeSettings {
    pub hyphens: bool,
    pub padding: PaddingMode,
}

/// Decoding defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DecodeSettings {
    pub padding: PaddingMode,
}

/// Effective defaults for the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Settings {
    pub encode: EncodeSettings,
    pub decode: DecodeSettings,
}

/// One configuration layer as read from TOML. Absent keys leave the
/// underlying value untouched when merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(default)]
    pub encode: EncodeLayer,
    #[serde(default)]
    pub decode: DecodeLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeLayer {
    pub hyphens: Option<bool>,
    pub padding: Option<PaddingMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeLayer {
    pub padding: Option<PaddingMode>,
}

impl SettingsLayer {
    /// Parses a configuration layer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a configuration layer from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Settings {
    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../proquint.toml");
        let mut settings = Settings::default();
        settings.merge(SettingsLayer::from_toml(content)?);
        Ok(settings)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/proquint/config.toml` (user overrides)
    /// 3. `./proquint.toml` (project-local overrides)
    ///
    /// Layers that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("proquint").join("config.toml");
            settings.merge_optional(&user_config_path);
        }

        settings.merge_optional(Path::new("proquint.toml"));

        Ok(settings)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match SettingsLayer::load_from_file(path) {
            Ok(layer) => {
                tracing::debug!(path = %path.display(), "applied configuration layer");
                self.merge(layer);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load configuration, skipping");
            }
        }
    }

    /// Applies every value present in `layer` on top of `self`.
    pub fn merge(&mut self, layer: SettingsLayer) {
        if let Some(hyphens) = layer.encode.hyphens {
            self.encode.hyphens = hyphens;
        }
        if let Some(padding) = layer.encode.padding {
            self.encode.padding = padding;
        }
        if let Some(padding) = layer.decode.padding {
            self.decode.padding = padding;
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::new(self.encode.hyphens, self.encode.padding)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::new(self.decode.padding)
    }
}

//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call. Fails with
/// [`SettingsError::AlreadyInitialized`] once the singleton has been built.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)?;
    debug!("custom accent settings installed");
    Ok(())
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub markup: MarkupSettings,
    pub markers: MarkerSettings,
    pub segmentation: SegmentationSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupFlavor {
    /// `<span style="background-image: url(..);">`
    Background,
    /// `<span><img src="..">`
    Img,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkupSettings {
    pub flavor: MarkupFlavor,
    pub image_base: String,
    pub css_class: String,
}

/// Annotation characters recognized inside a word.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkerSettings {
    pub rising: char,
    pub falling: Vec<char>,
    pub flat_end: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationSettings {
    pub youon: Vec<char>,
    #[serde(default)]
    pub romaji_continuations: bool,
}

impl SegmentationSettings {
    pub fn is_youon(&self, c: char) -> bool {
        self.youon.contains(&c)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(markup.css_class);
    check_non_empty!(markers.falling);

    if s.markup.css_class.contains(['"', '<', '>']) {
        return Err(SettingsError::InvalidValue {
            field: "markup.css_class".to_string(),
            reason: "must not contain quotes or angle brackets".to_string(),
        });
    }

    // Each character may play exactly one role: rising, falling, flat end or youon.
    let mut roles: HashMap<char, &'static str> = HashMap::new();
    let assigned = std::iter::once((s.markers.rising, "markers.rising"))
        .chain(s.markers.falling.iter().map(|&c| (c, "markers.falling")))
        .chain(std::iter::once((s.markers.flat_end, "markers.flat_end")))
        .chain(
            s.segmentation
                .youon
                .iter()
                .map(|&c| (c, "segmentation.youon")),
        );
    for (c, field) in assigned {
        if let Some(prev) = roles.insert(c, field) {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: format!("'{c}' is already used by {prev}"),
            });
        }
    }

    Ok(())
}

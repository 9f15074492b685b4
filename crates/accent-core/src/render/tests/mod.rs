
use crate::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

use super::{AccentSpan, AccentStyle};

pub(super) fn default_settings() -> Settings {
    parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
}

/// `(style, text)` pairs for compact assertions.
pub(super) fn pairs(spans: &[AccentSpan]) -> Vec<(AccentStyle, &str)> {
    spans.iter().map(|s| (s.style, s.text.as_str())).collect()
}

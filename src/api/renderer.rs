use std::sync::Arc;

use accent_core::markers::strip_markers_with;
use accent_core::mora::{segment_with, validate_word_with};
use accent_core::render::{render_accents_with, render_spans_with};
use accent_core::romaji::{romanize_with, RomajiTable};
use accent_core::settings::{parse_settings_toml, Settings};

use super::types::rendering_record;
use super::{AccentEngineError, AccentRenderingRecord, MoraRecord};

/// Renderer with its own settings, for hosts that show several markup
/// styles side by side (the admin pages use `img`, the quiz uses
/// `background`).
#[derive(uniffi::Object)]
pub struct AccentRenderer {
    settings: Settings,
}

#[uniffi::export]
impl AccentRenderer {
    /// Build from a settings TOML document, or the embedded defaults when `None`.
    #[uniffi::constructor]
    fn new(settings_toml: Option<String>) -> Result<Arc<Self>, AccentEngineError> {
        let toml = settings_toml
            .as_deref()
            .unwrap_or(accent_core::settings::DEFAULT_SETTINGS_TOML);
        let settings = parse_settings_toml(toml)
            .map_err(|e| AccentEngineError::InvalidData { msg: e.to_string() })?;
        Ok(Arc::new(Self { settings }))
    }

    fn render_accents(&self, word: String, show_accents: bool) -> String {
        render_accents_with(&self.settings, &word, show_accents)
    }

    fn render_spans(&self, word: String) -> AccentRenderingRecord {
        let rendering = render_spans_with(&self.settings, &word);
        let markup = rendering.to_markup(&self.settings);
        rendering_record(rendering, markup)
    }

    fn segment_moras(&self, word: String) -> Vec<MoraRecord> {
        segment_with(&self.settings, &word)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    fn strip_markers(&self, word: String) -> String {
        strip_markers_with(&self.settings.markers, &word)
    }

    fn romanize(&self, word: String) -> String {
        romanize_with(&self.settings, RomajiTable::global(), &word)
    }

    fn validate_word(&self, word: String) -> Result<(), AccentEngineError> {
        validate_word_with(&self.settings, &word)?;
        Ok(())
    }
}

//! UniFFI export layer: bindings for UI hosts that inject accent markup.
//!
//! Top-level functions use the process-wide settings; [`AccentRenderer`]
//! carries its own.

mod renderer;
mod types;

pub use renderer::AccentRenderer;
pub use types::{
    AccentEngineError, AccentRenderingRecord, AccentSpanRecord, AccentStyleKind, MoraRecord,
    RenderModeKind,
};

use accent_core::romaji::RomajiTable;
use accent_core::settings::settings;

use types::rendering_record;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn render_accents(word: String, show_accents: bool) -> String {
    accent_core::render_accents(&word, show_accents)
}

#[uniffi::export]
fn render_spans(word: String) -> AccentRenderingRecord {
    let rendering = accent_core::render_spans(&word);
    let markup = rendering.to_markup(settings());
    rendering_record(rendering, markup)
}

#[uniffi::export]
fn segment_moras(word: String) -> Vec<MoraRecord> {
    accent_core::segment_into_moras(&word)
        .into_iter()
        .map(Into::into)
        .collect()
}

#[uniffi::export]
fn strip_markers(word: String) -> String {
    accent_core::strip_markers(&word)
}

#[uniffi::export]
fn romanize(word: String) -> String {
    accent_core::romanize(&word)
}

#[uniffi::export]
fn validate_word(word: String) -> Result<(), AccentEngineError> {
    accent_core::validate_word(&word)?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), AccentEngineError> {
    let content = std::fs::read_to_string(&path).map_err(|e| AccentEngineError::Io {
        msg: format!("{path}: {e}"),
    })?;
    accent_core::settings::init_custom(content)
        .map_err(|e| AccentEngineError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    accent_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn romaji_load_config(path: String) -> Result<(), AccentEngineError> {
    let content = std::fs::read_to_string(&path).map_err(|e| AccentEngineError::Io {
        msg: format!("{path}: {e}"),
    })?;
    RomajiTable::init_custom(content)
        .map_err(|e| AccentEngineError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn romaji_default_config() -> String {
    accent_core::romaji::default_toml().to_string()
}

#[uniffi::export]
fn init_tracing(log_dir: String) {
    crate::trace_init::init_tracing(std::path::Path::new(&log_dir));
}

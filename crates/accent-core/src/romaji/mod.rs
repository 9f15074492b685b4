//! Kana-to-romaji transcription for learners who cannot read kana yet.
//!
//! The kana table is TOML (embedded default, replaceable once at startup);
//! youon, sokuon and the long vowel mark are handled in code.

mod config;
mod transcribe;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use table::RomajiTable;
pub use transcribe::{romanize, romanize_with};

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

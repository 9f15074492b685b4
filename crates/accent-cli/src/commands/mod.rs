pub mod config_ops;
pub mod render_ops;

use std::fs;

use accent_core::romaji::RomajiTable;
use accent_core::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] accent_core::settings::SettingsError),
    #[error(transparent)]
    Romaji(#[from] accent_core::romaji::RomajiConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&str>) -> Result<Settings, CliError> {
    let content = match path {
        Some(p) => read_file(p)?,
        None => DEFAULT_SETTINGS_TOML.to_string(),
    };
    Ok(parse_settings_toml(&content)?)
}

/// Romaji table from `path`, or the embedded default.
pub fn load_romaji_table(path: Option<&str>) -> Result<RomajiTable, CliError> {
    match path {
        Some(p) => Ok(RomajiTable::from_toml(&read_file(p)?)?),
        None => Ok(RomajiTable::global().clone()),
    }
}

use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();

/// Hiragana → romaji lookup.
#[derive(Debug, Clone)]
pub struct RomajiTable {
    map: HashMap<char, String>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call. Rejected once the
    /// global table has been built.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RomajiConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RomajiTable::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?
            .into_iter()
            .filter_map(|(kana, romaji)| kana.chars().next().map(|c| (c, romaji)))
            .collect();
        Ok(Self { map })
    }

    pub fn lookup(&self, kana: char) -> Option<&str> {
        self.map.get(&kana).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

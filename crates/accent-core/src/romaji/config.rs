use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key is not a single hiragana: {0}")]
    NonHiraganaKey(String),
    #[error("non-ASCII value for key {0}")]
    NonAsciiValue(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_hiragana(c) => {}
            _ => return Err(RomajiConfigError::NonHiraganaKey(key.clone())),
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
        if !value.is_ascii() {
            return Err(RomajiConfigError::NonAsciiValue(key.clone()));
        }
    }

    Ok(config.mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
"あ" = "a"
"か" = "ka"
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["あ"], "a");
        assert_eq!(map["か"], "ka");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 70, "expected 70+ mappings, got {}", map.len());
        assert_eq!(map["し"], "shi");
        assert_eq!(map["を"], "o");
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_romaji_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_katakana_key() {
        let toml = "
[mappings]
\"カ\" = \"ka\"
";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::NonHiraganaKey(_)));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = "
[mappings]
\"きゃ\" = \"kya\"
";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::NonHiraganaKey(_)));
    }

    #[test]
    fn error_non_ascii_value() {
        let toml = "
[mappings]
\"か\" = \"kā\"
";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::NonAsciiValue(_)));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
"あ" = ""
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}

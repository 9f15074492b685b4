use accent_core::romaji::parse_romaji_toml;
use accent_core::settings::{parse_settings_toml, MarkupFlavor, Settings};

use super::{read_file, CliError};

pub fn romaji_export() -> &'static str {
    accent_core::romaji::default_toml()
}

pub fn romaji_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let map = parse_romaji_toml(&content)?;
    Ok(format!("OK: {} mappings", map.len()))
}

pub fn settings_export() -> &'static str {
    accent_core::settings::default_toml()
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = parse_settings_toml(&content)?;
    Ok(summarize(&s))
}

fn summarize(s: &Settings) -> String {
    let flavor = match s.markup.flavor {
        MarkupFlavor::Background => "background",
        MarkupFlavor::Img => "img",
    };
    let falling: String = s.markers.falling.iter().collect();
    format!(
        "OK: markup.flavor={flavor}, markers.rising={}, markers.falling={falling}, \
         markers.flat_end={}, segmentation.youon={}",
        s.markers.rising,
        s.markers.flat_end,
        s.segmentation.youon.len()
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn exported_settings_validate() {
        let f = temp_file(settings_export());
        let msg = settings_validate(f.path().to_str().unwrap()).unwrap();
        assert_eq!(
            msg,
            "OK: markup.flavor=background, markers.rising=／, markers.falling=・*＊, \
             markers.flat_end=＝, segmentation.youon=6"
        );
    }

    #[test]
    fn exported_romaji_validates() {
        let f = temp_file(romaji_export());
        let msg = romaji_validate(f.path().to_str().unwrap()).unwrap();
        assert!(msg.starts_with("OK: "));
        assert!(msg.ends_with(" mappings"));
    }

    #[test]
    fn invalid_settings_reported() {
        let f = temp_file("[markup]\nflavor = \"background\"\n");
        let err = settings_validate(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }

    #[test]
    fn missing_file_reported() {
        let err = romaji_validate("/nonexistent/romaji.toml").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("reading /nonexistent/romaji.toml"));
    }
}

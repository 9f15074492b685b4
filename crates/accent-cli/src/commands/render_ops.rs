use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use accent_core::markers::strip_markers_with;
use accent_core::mora::{segment_with, validate_word_with, AccentError, Mora};
use accent_core::render::{render_accents_with, render_spans_with, AccentSpan, RenderMode};
use accent_core::romaji::{romanize_with, RomajiTable};
use accent_core::settings::Settings;

use super::CliError;

#[derive(Debug, Serialize)]
struct RenderOutput<'a> {
    word: &'a str,
    mode: RenderMode,
    spans: Vec<AccentSpan>,
    markup: String,
}

pub fn render(
    settings: &Settings,
    word: &str,
    plain: bool,
    json: bool,
) -> Result<String, CliError> {
    if !json {
        return Ok(render_accents_with(settings, word, !plain));
    }
    let rendering = render_spans_with(settings, word);
    let markup = if plain {
        strip_markers_with(&settings.markers, word)
    } else {
        rendering.to_markup(settings)
    };
    let out = RenderOutput {
        word,
        mode: rendering.mode,
        spans: rendering.spans,
        markup,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn moras(settings: &Settings, word: &str, json: bool) -> Result<String, CliError> {
    let moras = segment_with(settings, word);
    if json {
        return Ok(serde_json::to_string_pretty(&moras)?);
    }
    Ok(format_mora_table(&moras))
}

/// Aligned table of moras and their flags. Column widths use display
/// width so full-width kana line up in a terminal.
pub fn format_mora_table(moras: &[Mora]) -> String {
    let text_width = moras
        .iter()
        .map(|m| m.text.width())
        .chain(std::iter::once("mora".width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {}  rise  fall  flat\n",
        "#",
        pad("mora", text_width)
    ));
    for (i, m) in moras.iter().enumerate() {
        out.push_str(&format!(
            "{i:>3}  {}  {:<4}  {:<4}  {}\n",
            pad(&m.text, text_width),
            flag(m.rising),
            flag(m.falling),
            flag(m.flat_end),
        ));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn flag(on: bool) -> &'static str {
    if on {
        "x"
    } else {
        "-"
    }
}

pub fn strip(settings: &Settings, word: &str) -> String {
    strip_markers_with(&settings.markers, word)
}

pub fn romanize(settings: &Settings, table: &RomajiTable, word: &str) -> String {
    romanize_with(settings, table, word)
}

pub fn check(settings: &Settings, word: &str) -> Result<(), AccentError> {
    validate_word_with(settings, word)
}

/// Problems found by a strict batch run, as `(line number, error)`.
pub type BatchErrors = Vec<(usize, AccentError)>;

/// Render every non-blank line of `input`, one output line per word.
/// With `strict`, malformed words are collected instead of rendered.
pub fn batch(
    settings: &Settings,
    input: &str,
    plain: bool,
    strict: bool,
) -> (String, BatchErrors) {
    let mut out = String::new();
    let mut errors = Vec::new();
    for (n, line) in input.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if strict {
            if let Err(e) = validate_word_with(settings, word) {
                errors.push((n + 1, e));
                continue;
            }
        }
        out.push_str(&render_accents_with(settings, word, !plain));
        out.push('\n');
    }
    (out, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load_settings;

    fn settings() -> Settings {
        load_settings(None).unwrap()
    }

    #[test]
    fn render_markup_and_plain() {
        let s = settings();
        let html = render(&s, "カ・キ", false, false).unwrap();
        assert!(html.contains("accent_start_end.png"));
        assert_eq!(render(&s, "カ・キ", true, false).unwrap(), "カキ");
    }

    #[test]
    fn render_json_lists_spans() {
        let s = settings();
        let json = render(&s, "ア／イウ・", false, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["word"], "ア／イウ・");
        assert_eq!(v["mode"], "pitch_contour");
        assert_eq!(v["spans"][0]["style"], "empty");
        assert_eq!(v["spans"][1]["style"], "start");
        assert_eq!(v["spans"][2]["style"], "end");
        assert_eq!(v["spans"][2]["text"], "ウ");
    }

    #[test]
    fn render_json_plain_markup_is_stripped() {
        let s = settings();
        let json = render(&s, "ト＊ウ", true, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["mode"], "single_peak");
        assert_eq!(v["markup"], "トウ");
    }

    #[test]
    fn moras_json() {
        let s = settings();
        let json = moras(&s, "キャ・ク", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["text"], "キャ");
        assert_eq!(v[0]["falling"], true);
        assert_eq!(v[1]["flat_end"], false);
    }

    #[test]
    fn mora_table_aligns_full_width_text() {
        let s = settings();
        let table = moras(&s, "キャ・ク", false).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  #  mora  rise  fall  flat");
        assert_eq!(lines[1], "  0  キャ  -     x     -");
        assert_eq!(lines[2], "  1  ク    -     -     -");
    }

    #[test]
    fn strip_and_romanize() {
        let s = settings();
        assert_eq!(strip(&s, "カ／ン・コク"), "カンコク");
        assert_eq!(romanize(&s, RomajiTable::global(), "カ／ン・コク"), "kankoku");
    }

    #[test]
    fn check_reports_position() {
        let s = settings();
        assert!(check(&s, "アイ").is_ok());
        let err = check(&s, "ア・・＝／").unwrap_err();
        assert_eq!(err.to_string(), "rising marker at index 4 has no mora to attach to");
    }

    #[test]
    fn batch_renders_each_line() {
        let s = settings();
        let (out, errors) = batch(&s, "カ・キ\n\n  ト＊ウ  \n", true, false);
        assert_eq!(out, "カキ\nトウ\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn batch_strict_collects_malformed_lines() {
        let s = settings();
        let (out, errors) = batch(&s, "カ・キ\n・ア\nゃく\n", true, true);
        assert_eq!(out, "カキ\n");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].0, 2);
        assert_eq!(errors[1].0, 3);
        assert!(matches!(errors[1].1, AccentError::LeadingContinuation { index: 0 }));
    }
}

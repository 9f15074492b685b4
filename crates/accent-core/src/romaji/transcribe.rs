use tracing::{debug, debug_span};

use crate::settings::{settings, Settings};
use crate::unicode::{is_romaji_vowel, katakana_char_to_hiragana};

use super::table::RomajiTable;

/// Romanize an annotated word with the global settings and table.
pub fn romanize(word: &str) -> String {
    romanize_with(settings(), RomajiTable::global(), word)
}

/// Markers are dropped, katakana is read as hiragana, and characters the
/// table does not know are copied through unchanged. A `っ` with no
/// consonant after it to double is kept as written.
pub fn romanize_with(settings: &Settings, table: &RomajiTable, word: &str) -> String {
    let _span = debug_span!("romanize", chars = word.chars().count()).entered();

    let mut syllables: Vec<String> = Vec::new();
    // A pending small tsu, as written (っ or ッ).
    let mut sokuon: Option<char> = None;

    for c in word.chars() {
        if settings.markers.is_marker(c) {
            continue;
        }
        let h = katakana_char_to_hiragana(c);
        if h == 'っ' {
            flush_sokuon(&mut syllables, sokuon.replace(c));
            continue;
        }
        let syllable = match (settings.segmentation.is_youon(c), youon_vowel(h)) {
            (true, Some(vowel)) => {
                flush_sokuon(&mut syllables, sokuon.take());
                merge_youon(&mut syllables, vowel);
                continue;
            }
            _ if h == 'ー' => {
                let vowel = syllables
                    .last()
                    .and_then(|s| s.chars().rev().find(|&c| is_romaji_vowel(c)));
                vowel.map_or_else(|| "-".to_string(), String::from)
            }
            _ => table
                .lookup(h)
                .map_or_else(|| c.to_string(), str::to_string),
        };
        match sokuon.take() {
            Some(tsu) => match geminate(&syllable) {
                Some(doubled) => syllables.push(doubled),
                None => {
                    syllables.push(tsu.to_string());
                    syllables.push(syllable);
                }
            },
            None => syllables.push(syllable),
        }
    }
    flush_sokuon(&mut syllables, sokuon);

    let out = syllables.concat();
    debug!(syllables = syllables.len(), romaji = %out);
    out
}

fn flush_sokuon(syllables: &mut Vec<String>, sokuon: Option<char>) {
    if let Some(tsu) = sokuon {
        syllables.push(tsu.to_string());
    }
}

fn youon_vowel(c: char) -> Option<char> {
    match c {
        'ゃ' | 'ぁ' | 'ゎ' => Some('a'),
        'ぃ' => Some('i'),
        'ゅ' | 'ぅ' => Some('u'),
        'ぇ' => Some('e'),
        'ょ' | 'ぉ' => Some('o'),
        _ => None,
    }
}

/// `ki`+`ゃ` → `kya`, `shi`+`ゃ` → `sha`, `ji`+`ゅ` → `ju`.
fn merge_youon(syllables: &mut Vec<String>, vowel: char) {
    if let Some(last) = syllables.last_mut() {
        if last.len() >= 2 && last.ends_with('i') {
            last.pop();
            if !(last.ends_with('h') || last.ends_with('j')) {
                last.push('y');
            }
            last.push(vowel);
            return;
        }
    }
    syllables.push(format!("y{vowel}"));
}

/// Double the leading consonant for a preceding っ (`ka` → `kka`, `chi` → `tchi`).
/// `None` when the syllable does not start with a consonant.
fn geminate(syllable: &str) -> Option<String> {
    match syllable.chars().next() {
        Some(c) if c.is_ascii_alphabetic() && !is_romaji_vowel(c) => {
            let lead = if syllable.starts_with("ch") { 't' } else { c };
            Some(format!("{lead}{syllable}"))
        }
        _ => None,
    }
}

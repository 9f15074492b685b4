//! Mora segmentation of annotated words.
//!
//! A word such as `カ／ン・コク` is scanned left to right. Markers set flags
//! on the neighbouring mora instead of producing output, small-y youon are
//! glued onto the preceding mora, and every other character starts a new
//! mora.
//!
//! The scan never fails. Stray markers are ignored and a leading youon
//! becomes a mora of its own; [`validate_word`] reports those cases for
//! callers that want to reject them.

mod validate;

pub use validate::{validate_word, validate_word_with, AccentError};

use serde::Serialize;

use crate::markers::MarkerKind;
use crate::settings::{settings, Settings};
use crate::unicode::{is_romaji_glide, is_romaji_vowel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mora {
    pub text: String,
    pub rising: bool,
    pub falling: bool,
    pub flat_end: bool,
}

impl Mora {
    fn new(c: char, rising: bool) -> Self {
        Self {
            text: c.to_string(),
            rising,
            falling: false,
            flat_end: false,
        }
    }
}

pub fn segment_into_moras(word: &str) -> Vec<Mora> {
    segment_with(settings(), word)
}

pub fn segment_with(settings: &Settings, word: &str) -> Vec<Mora> {
    let markers = &settings.markers;
    let seg = &settings.segmentation;

    let mut moras: Vec<Mora> = Vec::new();
    let mut rising = false;
    // Whether the last mora still accepts continuation characters.
    let mut open = false;

    for c in word.chars() {
        if let Some(kind) = markers.classify(c) {
            match kind {
                MarkerKind::Rising => rising = true,
                MarkerKind::Falling => {
                    if let Some(last) = moras.last_mut() {
                        last.falling = true;
                    }
                }
                MarkerKind::FlatEnd => {
                    if let Some(last) = moras.last_mut() {
                        last.flat_end = true;
                    }
                }
            }
            continue;
        }

        let romaji_vowel = seg.romaji_continuations && is_romaji_vowel(c);
        if open {
            if let Some(last) = moras.last_mut() {
                if seg.is_youon(c) || (seg.romaji_continuations && is_romaji_glide(c)) {
                    last.text.push(c);
                    continue;
                }
                if romaji_vowel {
                    last.text.push(c);
                    open = false;
                    continue;
                }
            }
        }

        moras.push(Mora::new(c, std::mem::take(&mut rising)));
        // A bare romaji vowel is a complete mora on its own.
        open = !romaji_vowel;
    }

    moras
}

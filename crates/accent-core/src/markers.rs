//! Pitch annotation markers and the plain-text fallback.

use serde::Serialize;

use crate::settings::{settings, MarkerSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// The next mora starts a pitch rise.
    Rising,
    /// Pitch falls after the previous mora.
    Falling,
    /// The previous mora holds a flat pitch to the end.
    FlatEnd,
}

impl MarkerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::FlatEnd => "flat_end",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MarkerSettings {
    pub fn classify(&self, c: char) -> Option<MarkerKind> {
        if c == self.rising {
            Some(MarkerKind::Rising)
        } else if c == self.flat_end {
            Some(MarkerKind::FlatEnd)
        } else if self.falling.contains(&c) {
            Some(MarkerKind::Falling)
        } else {
            None
        }
    }

    pub fn is_marker(&self, c: char) -> bool {
        self.classify(c).is_some()
    }

    pub fn has_rising(&self, word: &str) -> bool {
        word.contains(self.rising)
    }
}

/// Remove every annotation marker, keeping kana and youon intact.
pub fn strip_markers(word: &str) -> String {
    strip_markers_with(&settings().markers, word)
}

pub fn strip_markers_with(markers: &MarkerSettings, word: &str) -> String {
    word.chars().filter(|&c| !markers.is_marker(c)).collect()
}

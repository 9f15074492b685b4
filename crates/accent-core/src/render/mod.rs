//! Accent rendering: annotated word → styled character spans → HTML.
//!
//! Pipeline: segment → pick mode → assign one style per mora → expand
//! styles to characters → markup.

mod contour;
mod markup;
mod style;

#[cfg(test)]
mod tests;

pub use contour::{assign_styles, RenderMode};
pub use markup::{push_span, to_markup};
pub use style::AccentStyle;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::markers::strip_markers_with;
use crate::mora::{segment_with, Mora};
use crate::settings::{settings, Settings};

/// One character (or, for an unsplit mora, one mora) with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentSpan {
    pub style: AccentStyle,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentRendering {
    pub mode: RenderMode,
    pub spans: Vec<AccentSpan>,
}

impl AccentRendering {
    pub fn to_markup(&self, settings: &Settings) -> String {
        to_markup(&settings.markup, &self.spans)
    }
}

/// Render `word` as accent markup, or as plain text with markers removed
/// when `show_accents` is false.
pub fn render_accents(word: &str, show_accents: bool) -> String {
    render_accents_with(settings(), word, show_accents)
}

pub fn render_accents_with(settings: &Settings, word: &str, show_accents: bool) -> String {
    if !show_accents {
        return strip_markers_with(&settings.markers, word);
    }
    render_spans_with(settings, word).to_markup(settings)
}

pub fn render_spans(word: &str) -> AccentRendering {
    render_spans_with(settings(), word)
}

pub fn render_spans_with(settings: &Settings, word: &str) -> AccentRendering {
    let _span = debug_span!("render_spans", chars = word.chars().count()).entered();

    let moras = segment_with(settings, word);
    let mode = if settings.markers.has_rising(word) {
        RenderMode::PitchContour
    } else {
        RenderMode::SinglePeak
    };
    let styles = assign_styles(mode, &moras);

    let mut spans = Vec::with_capacity(moras.len() + 2);
    for (mora, style) in moras.iter().zip(styles) {
        expand_mora(mora, style, &mut spans);
    }
    debug!(moras = moras.len(), spans = spans.len(), ?mode);

    AccentRendering { mode, spans }
}

/// Split a mora into character spans. A single-character mora keeps its
/// style; longer moras get edge styles on the first and last character.
fn expand_mora(mora: &Mora, style: AccentStyle, spans: &mut Vec<AccentSpan>) {
    let mut chars = mora.text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        spans.push(AccentSpan {
            style,
            text: mora.text.clone(),
        });
        return;
    };
    let (first_style, last_style) = style.edges();
    spans.push(AccentSpan {
        style: first_style,
        text: first.to_string(),
    });
    let interior = style.interior();
    spans.extend(chars.map(|c| AccentSpan {
        style: interior,
        text: c.to_string(),
    }));
    spans.push(AccentSpan {
        style: last_style,
        text: last.to_string(),
    });
}

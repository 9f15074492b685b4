//! Pitch-accent rendering for annotated Japanese words.
//!
//! Words carry inline markers: `／` before the mora where pitch rises, `・`
//! (or legacy `*`) after the mora where it falls, `＝` after a mora that
//! stays flat to the end. [`render_accents`] turns such a word into HTML
//! spans whose background images draw the pitch line.

pub mod markers;
pub mod mora;
pub mod render;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use markers::{strip_markers, MarkerKind};
pub use mora::{segment_into_moras, validate_word, AccentError, Mora};
pub use render::{
    render_accents, render_spans, AccentRendering, AccentSpan, AccentStyle, RenderMode,
};
pub use romaji::romanize;

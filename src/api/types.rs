use accent_core::mora::{AccentError, Mora};
use accent_core::render::{AccentRendering, AccentSpan, AccentStyle, RenderMode};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum AccentEngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("malformed word: {msg}")]
    MalformedWord { msg: String },
}

impl From<AccentError> for AccentEngineError {
    fn from(e: AccentError) -> Self {
        Self::MalformedWord { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct MoraRecord {
    pub text: String,
    pub rising: bool,
    pub falling: bool,
    pub flat_end: bool,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct AccentSpanRecord {
    pub style: AccentStyleKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct AccentRenderingRecord {
    pub mode: RenderModeKind,
    pub spans: Vec<AccentSpanRecord>,
    /// Ready-to-inject HTML for `spans`.
    pub markup: String,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum AccentStyleKind {
    Empty,
    Middle,
    Start,
    StartFlat,
    End,
    FlatEnd,
    StartEnd,
    StartEndFlat,
    StartEndFlatShort,
    Peak,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum RenderModeKind {
    PitchContour,
    SinglePeak,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<AccentStyle> for AccentStyleKind {
    fn from(style: AccentStyle) -> Self {
        match style {
            AccentStyle::Empty => Self::Empty,
            AccentStyle::Middle => Self::Middle,
            AccentStyle::Start => Self::Start,
            AccentStyle::StartFlat => Self::StartFlat,
            AccentStyle::End => Self::End,
            AccentStyle::FlatEnd => Self::FlatEnd,
            AccentStyle::StartEnd => Self::StartEnd,
            AccentStyle::StartEndFlat => Self::StartEndFlat,
            AccentStyle::StartEndFlatShort => Self::StartEndFlatShort,
            AccentStyle::Peak => Self::Peak,
        }
    }
}

impl From<RenderMode> for RenderModeKind {
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::PitchContour => Self::PitchContour,
            RenderMode::SinglePeak => Self::SinglePeak,
        }
    }
}

impl From<Mora> for MoraRecord {
    fn from(m: Mora) -> Self {
        Self {
            text: m.text,
            rising: m.rising,
            falling: m.falling,
            flat_end: m.flat_end,
        }
    }
}

impl From<AccentSpan> for AccentSpanRecord {
    fn from(s: AccentSpan) -> Self {
        Self {
            style: s.style.into(),
            text: s.text,
        }
    }
}

pub(super) fn rendering_record(rendering: AccentRendering, markup: String) -> AccentRenderingRecord {
    AccentRenderingRecord {
        mode: rendering.mode.into(),
        spans: rendering.spans.into_iter().map(Into::into).collect(),
        markup,
    }
}

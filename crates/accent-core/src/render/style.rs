use serde::Serialize;

/// Visual style of one accent span. Each non-empty style is drawn by an
/// image of the pitch line over the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentStyle {
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

impl AccentStyle {
    pub const ALL: [AccentStyle; 10] = [
        Self::Empty,
        Self::Middle,
        Self::Start,
        Self::StartFlat,
        Self::End,
        Self::FlatEnd,
        Self::StartEnd,
        Self::StartEndFlat,
        Self::StartEndFlatShort,
        Self::Peak,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Middle => "middle",
            Self::Start => "start",
            Self::StartFlat => "start_flat",
            Self::End => "end",
            Self::FlatEnd => "flat_end",
            Self::StartEnd => "start_end",
            Self::StartEndFlat => "start_end_flat",
            Self::StartEndFlatShort => "start_end_flat_short",
            Self::Peak => "peak",
        }
    }

    /// Image file drawing this style, `None` for [`AccentStyle::Empty`].
    pub fn image(self) -> Option<&'static str> {
        Some(match self {
            Self::Empty => return None,
            Self::Middle => "accent_middle.png",
            Self::Start => "accent_start.png",
            Self::StartFlat => "accent_start_flat.png",
            Self::End => "accent_end.png",
            // Image names predate the style name.
            Self::FlatEnd => "accent_end_flat.png",
            Self::StartEnd => "accent_start_end.png",
            Self::StartEndFlat => "accent_start_end_flat.png",
            Self::StartEndFlatShort => "accent_start_end_flat_short.png",
            Self::Peak => "accent_peak.png",
        })
    }

    /// Styles of the first and last character when a mora spans several
    /// characters (`キャ`): the rise is drawn on the first, the fall or
    /// flat tail on the last.
    pub fn edges(self) -> (AccentStyle, AccentStyle) {
        match self {
            Self::End => (Self::Middle, Self::End),
            Self::StartEnd => (Self::StartFlat, Self::End),
            Self::Peak => (Self::Start, Self::End),
            Self::StartEndFlat | Self::Start => (Self::Start, Self::FlatEnd),
            other => (other, other),
        }
    }

    /// Style of characters strictly between the edges of a long mora. The
    /// whole-word short style and the empty style cover every character.
    pub fn interior(self) -> AccentStyle {
        match self {
            Self::Empty | Self::StartEndFlatShort => self,
            _ => Self::Middle,
        }
    }
}

impl std::fmt::Display for AccentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_lacks_image() {
        for style in AccentStyle::ALL {
            assert_eq!(style.image().is_none(), style == AccentStyle::Empty);
        }
        assert_eq!(AccentStyle::FlatEnd.image(), Some("accent_end_flat.png"));
    }

    #[test]
    fn edge_lookup() {
        use AccentStyle::*;
        assert_eq!(End.edges(), (Middle, End));
        assert_eq!(StartEnd.edges(), (StartFlat, End));
        assert_eq!(Peak.edges(), (Start, End));
        assert_eq!(StartEndFlat.edges(), (Start, FlatEnd));
        assert_eq!(Start.edges(), (Start, FlatEnd));
        assert_eq!(Middle.edges(), (Middle, Middle));
        assert_eq!(Empty.edges(), (Empty, Empty));
    }

    #[test]
    fn interior_lookup() {
        use AccentStyle::*;
        assert_eq!(Empty.interior(), Empty);
        assert_eq!(StartEndFlatShort.interior(), StartEndFlatShort);
        assert_eq!(Peak.interior(), Middle);
        assert_eq!(Start.interior(), Middle);
    }
}

use serde::Serialize;

use crate::mora::Mora;

use super::style::AccentStyle;

/// How mora styles are derived for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Explicit rise/fall/flat markers drive the contour.
    PitchContour,
    /// Legacy words: low first mora, high from the second, at most one fall.
    SinglePeak,
}

/// Assign one style per mora. First matching case wins in both modes.
pub fn assign_styles(mode: RenderMode, moras: &[Mora]) -> Vec<AccentStyle> {
    if moras.len() == 1 {
        return vec![AccentStyle::StartEndFlatShort];
    }
    match mode {
        RenderMode::PitchContour => pitch_contour(moras),
        RenderMode::SinglePeak => single_peak(moras),
    }
}

fn pitch_contour(moras: &[Mora]) -> Vec<AccentStyle> {
    let mut started = false;
    let mut ended = false;
    moras
        .iter()
        .map(|m| match (m.rising, m.falling, m.flat_end) {
            (true, true, _) => {
                started = true;
                ended = true;
                AccentStyle::Peak
            }
            (true, _, true) => {
                started = true;
                ended = true;
                AccentStyle::StartEndFlat
            }
            (true, _, _) => {
                started = true;
                AccentStyle::Start
            }
            (_, true, _) => {
                ended = true;
                AccentStyle::End
            }
            (_, _, true) => {
                ended = true;
                AccentStyle::FlatEnd
            }
            _ if started && !ended => AccentStyle::Middle,
            _ => AccentStyle::Empty,
        })
        .collect()
}

fn single_peak(moras: &[Mora]) -> Vec<AccentStyle> {
    let last = moras.len().saturating_sub(1);
    let mut ended = false;
    moras
        .iter()
        .enumerate()
        .map(|(i, m)| {
            if i == 0 && m.falling {
                ended = true;
                return AccentStyle::StartEnd;
            }
            if ended || i == 0 {
                return AccentStyle::Empty;
            }
            match (i, m.falling) {
                (1, true) => {
                    ended = true;
                    AccentStyle::Peak
                }
                (1, false) if i == last => AccentStyle::StartEndFlat,
                (1, false) => AccentStyle::Start,
                _ if i == last => AccentStyle::FlatEnd,
                (_, true) => {
                    ended = true;
                    AccentStyle::End
                }
                (_, false) => AccentStyle::Middle,
            }
        })
        .collect()
}

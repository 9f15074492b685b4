use crate::markers::MarkerKind;
use crate::settings::{settings, Settings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccentError {
    #[error("word is empty")]
    Empty,
    #[error("{kind} marker at index {index} has no mora to attach to")]
    StrayMarker { kind: MarkerKind, index: usize },
    #[error("continuation at index {index} has no preceding mora")]
    LeadingContinuation { index: usize },
}

/// Fail-fast check of marker placement. Indices count characters, not bytes.
pub fn validate_word(word: &str) -> Result<(), AccentError> {
    validate_word_with(settings(), word)
}

pub fn validate_word_with(settings: &Settings, word: &str) -> Result<(), AccentError> {
    let mut has_mora = false;
    let mut pending_rising: Option<usize> = None;

    for (index, c) in word.chars().enumerate() {
        match settings.markers.classify(c) {
            Some(MarkerKind::Rising) => {
                pending_rising.get_or_insert(index);
            }
            Some(kind) => {
                if !has_mora {
                    return Err(AccentError::StrayMarker { kind, index });
                }
            }
            None => {
                if !has_mora && settings.segmentation.is_youon(c) {
                    return Err(AccentError::LeadingContinuation { index });
                }
                has_mora = true;
                pending_rising = None;
            }
        }
    }

    if !has_mora {
        return match pending_rising {
            Some(index) => Err(AccentError::StrayMarker {
                kind: MarkerKind::Rising,
                index,
            }),
            None => Err(AccentError::Empty),
        };
    }
    if let Some(index) = pending_rising {
        return Err(AccentError::StrayMarker {
            kind: MarkerKind::Rising,
            index,
        });
    }
    Ok(())
}

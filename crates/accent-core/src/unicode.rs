//! Character-level classification for annotated Japanese words.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Vowels that close an open romaji mora.
pub fn is_romaji_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Consonants that may follow an onset inside one romaji mora (ky, sh, ts).
pub fn is_romaji_glide(c: char) -> bool {
    matches!(c, 'y' | 'h' | 's')
}

/// Convert a katakana letter to hiragana.
///
/// Only the letters with a hiragana counterpart (ァ U+30A1..ヶ U+30F6) are
/// shifted; ー, ・ and other block symbols pass through unchanged.
pub fn katakana_char_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        let fold = |s: &str| s.chars().map(katakana_char_to_hiragana).collect::<String>();
        assert_eq!(fold("キョウ"), "きょう");
        assert_eq!(fold("ラーメン"), "らーめん");
        assert_eq!(fold("ト・ウ"), "と・う");
        assert_eq!(fold("ァヶ"), "ぁゖ");
        assert_eq!(fold("abc"), "abc");
        assert_eq!(fold("ひらがな"), "ひらがな");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_hiragana('ゃ'));
        assert!(!is_hiragana('／'));
        assert!(is_romaji_vowel('o'));
        assert!(!is_romaji_vowel('y'));
        assert!(is_romaji_glide('h'));
        assert!(!is_romaji_glide('k'));
    }
}

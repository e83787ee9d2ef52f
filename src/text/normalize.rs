//! Unicode normalization and trimming of text inputs.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Default byte budget for trimmed title and extra fields.
pub const INPUT_TRIM: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Separator,
    Kept,
    Dropped,
}

fn classify(c: char) -> CharClass {
    use GeneralCategory::*;
    match get_general_category(c) {
        SpaceSeparator | LineSeparator | ParagraphSeparator => CharClass::Separator,
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
        | DecimalNumber | LetterNumber | OtherNumber | MathSymbol | CurrencySymbol
        | ModifierSymbol | OtherSymbol => CharClass::Kept,
        _ => CharClass::Dropped,
    }
}

/// NFKC followed by trimming surrounding whitespace.
pub fn pre_normalize(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    composed.trim().to_string()
}

/// Truncate to at most `max_bytes` bytes without splitting a code point.
pub fn trim(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Reduce text to lower-cased letters, numbers and symbols separated by single spaces.
///
/// Works on the NFD decomposition so combining marks fall away as their own
/// code points; the result is recomposed with NFC.
pub fn normalize(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    for c in text.nfd() {
        match classify(c) {
            CharClass::Separator => {
                if !filtered.ends_with(' ') {
                    filtered.push(' ');
                }
            }
            CharClass::Kept => filtered.extend(c.to_lowercase()),
            CharClass::Dropped => {}
        }
    }
    filtered.trim().nfc().collect()
}

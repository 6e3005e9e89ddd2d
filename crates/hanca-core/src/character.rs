// Character classification and Turkish-aware case mapping

use crate::enums::{CharClass, ConsonantClass, Harmony};

// ---------------------------------------------------------------------------
// Hanca alphabet
//
// All tables are stored uppercase. Rare consonants may be multi-letter units
// (TS, PF, DZ); each of their letters is itself a common consonant of the
// same class, so per-character classification stays unambiguous.
// ---------------------------------------------------------------------------

/// Thick (back) vowels.
pub const THICK_VOWELS: &[char] = &['A', 'I', 'O', 'U', '\u{00C5}'];

/// Thin (front) vowels.
pub const THIN_VOWELS: &[char] = &['E', '\u{0130}', '\u{00D6}', '\u{00DC}', '\u{00C4}'];

/// Frequently used hard consonants.
pub const COMMON_HARD: &[&str] = &["K", "P", "T", "S", "\u{015E}", "F", "H", "\u{00C7}"];

/// Frequently used soft consonants.
pub const COMMON_SOFT: &[&str] = &["R", "L", "M", "N", "V", "Y", "Z", "B", "D", "G", "J"];

/// Rare hard consonant units.
pub const RARE_HARD: &[&str] = &["Q", "X", "TS", "PF"];

/// Rare soft consonant units: W Ŋ Γ DZ Ğ.
pub const RARE_SOFT: &[&str] = &["W", "\u{014A}", "\u{0393}", "DZ", "\u{011E}"];

/// Returns the vowel table for a harmony class.
pub fn vowels(harmony: Harmony) -> &'static [char] {
    match harmony {
        Harmony::Thick => THICK_VOWELS,
        Harmony::Thin => THIN_VOWELS,
    }
}

/// Returns the common or rare consonant pool for a class.
pub fn consonant_pool(class: ConsonantClass, rare: bool) -> &'static [&'static str] {
    match (class, rare) {
        (ConsonantClass::Hard, false) => COMMON_HARD,
        (ConsonantClass::Hard, true) => RARE_HARD,
        (ConsonantClass::Soft, false) => COMMON_SOFT,
        (ConsonantClass::Soft, true) => RARE_SOFT,
    }
}

fn in_pool(pool: &[&str], c: char) -> bool {
    pool.iter().any(|unit| {
        let mut chars = unit.chars();
        chars.next() == Some(c) && chars.next().is_none()
    })
}

/// Classify a character (either case) into the Hanca alphabet.
///
/// Lowercase letters are mapped with Turkish casing first, so `ı` is a
/// thick vowel and `i` a thin one. Returns `None` for characters outside
/// the alphabet (digits, punctuation, unknown letters).
pub fn classify(c: char) -> Option<CharClass> {
    let upper = turkish_upper(c);
    if THICK_VOWELS.contains(&upper) {
        return Some(CharClass::Vowel(Harmony::Thick));
    }
    if THIN_VOWELS.contains(&upper) {
        return Some(CharClass::Vowel(Harmony::Thin));
    }
    if in_pool(COMMON_HARD, upper) || in_pool(RARE_HARD, upper) {
        return Some(CharClass::Consonant(ConsonantClass::Hard));
    }
    if in_pool(COMMON_SOFT, upper) || in_pool(RARE_SOFT, upper) {
        return Some(CharClass::Consonant(ConsonantClass::Soft));
    }
    None
}

/// Check whether a character is a Hanca vowel of either harmony class.
pub fn is_vowel(c: char) -> bool {
    vowel_harmony(c).is_some()
}

/// Harmony class of a vowel, or `None` if the character is not a vowel.
pub fn vowel_harmony(c: char) -> Option<Harmony> {
    match classify(c) {
        Some(CharClass::Vowel(h)) => Some(h),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Case mapping
//
// The standard library lowercases İ to "i\u{307}" and uppercases i to I,
// neither of which is right for Turkish. The dotted/dotless pairs are
// special-cased; everything else takes the first char of the std mapping
// so that each character maps to exactly one character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a character using Turkish rules (I → ı, İ → i).
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => simple_lower(c),
    }
}

/// Uppercase a character using Turkish rules (i → İ, ı → I).
pub fn turkish_upper(c: char) -> char {
    match c {
        'i' => '\u{0130}',
        '\u{0131}' => 'I',
        _ => simple_upper(c),
    }
}

// Harmony-aware suffix recomposition

use hanca_core::analysis::HarmonyPair;
use hanca_core::character::{is_vowel, vowel_harmony};
use hanca_core::enums::Harmony;

/// Harmony of a root: the class of its last vowel, thick if it has none.
pub fn root_harmony(root: &str) -> Harmony {
    root.chars()
        .rev()
        .find_map(vowel_harmony)
        .unwrap_or(Harmony::Thick)
}

/// Result of attaching suffixes to a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub word: String,
    pub harmony: Harmony,
    /// Each suffix form as appended, after elision.
    pub applied: Vec<String>,
}

/// Append the suffixes to `root` in order.
///
/// Harmony is fixed once from the root. Before each append, a suffix form
/// starting with a vowel loses that vowel when the word so far ends in one,
/// so no boundary ever joins two vowels.
pub fn attach_suffixes<'a, I>(root: &str, suffixes: I) -> Composition
where
    I: IntoIterator<Item = &'a HarmonyPair>,
{
    let harmony = root_harmony(root);
    let mut word = root.to_string();
    let mut applied = Vec::new();

    for pair in suffixes {
        let form = pair.form(harmony);
        let ends_in_vowel = word.chars().last().is_some_and(is_vowel);
        let mut form_chars = form.chars();
        let piece = match form_chars.next() {
            Some(first) if ends_in_vowel && is_vowel(first) => form_chars.as_str(),
            _ => form,
        };
        word.push_str(piece);
        applied.push(piece.to_string());
    }

    Composition {
        word,
        harmony,
        applied,
    }
}

// Input normalization and proper-name casing

use crate::character::{turkish_lower, turkish_upper};

/// Produce the canonical lowercase form of a raw token.
///
/// `I` folds to dotless `ı` and `İ` to plain `i`; every other character is
/// lowercased one-to-one. Leading and trailing whitespace is stripped.
/// Dictionary keys are stored in this form, and every lookup goes through
/// it, so the function must stay idempotent.
pub fn normalize(text: &str) -> String {
    text.trim().chars().map(turkish_lower).collect()
}

/// Format a single token as a proper name.
///
/// A one-character token is uppercased entirely. Longer tokens get their
/// first and last characters uppercased and everything in between
/// lowercased: "ankara" becomes "AnkarA".
pub fn proper_name_case(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len());
    match chars.len() {
        0 => {}
        1 => push_upper(&mut out, chars[0]),
        n => {
            push_upper(&mut out, chars[0]);
            out.extend(chars[1..n - 1].iter().map(|&c| turkish_lower(c)));
            push_upper(&mut out, chars[n - 1]);
        }
    }
    out
}

/// Uppercase with Turkish dotted/dotless I, keeping multi-character
/// expansions such as `ß` -> `SS`.
fn push_upper(out: &mut String, c: char) {
    match c {
        'i' | '\u{0131}' => out.push(turkish_upper(c)),
        _ => out.extend(c.to_uppercase()),
    }
}

/// Apply [`proper_name_case`] to every whitespace-separated token of a line
/// and join the results with single spaces.
pub fn proper_name_line(text: &str) -> String {
    text.split_whitespace()
        .map(proper_name_case)
        .collect::<Vec<_>>()
        .join(" ")
}

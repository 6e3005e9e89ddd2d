// Suffix analysis: strip recognized suffixes from a normalized word
//
// Stripping works from the surface inward, one suffix per pass, and stops
// early when the remaining stem is a dictionary word. Matched suffixes are
// pushed to the front of a deque so the final list reads from the stem
// outward, which is the order they are re-attached in.

use std::collections::VecDeque;

use tracing::debug;

use hanca_core::analysis::HarmonyPair;

use crate::tables::Tables;

/// Maximum number of suffixes stripped from one word.
pub const MAX_STRIP_PASSES: usize = 4;

/// A stem shorter than this (in characters) is only accepted if it is a
/// dictionary word.
pub const MIN_STEM_CHARS: usize = 2;

/// Why suffix stripping stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripStop {
    /// The stem is a dictionary word.
    DictionaryStem,
    /// No rule matched the stem.
    NoMatch,
    /// [`MAX_STRIP_PASSES`] suffixes were stripped.
    PassLimit,
}

/// Output of suffix analysis for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixAnalysis<'t> {
    /// The stem left after stripping.
    pub stem: String,
    /// Matched suffixes, closest to the stem first.
    pub suffixes: VecDeque<&'t HarmonyPair>,
    pub stop: StripStop,
}

/// Strip suffixes from `word`, which must already be normalized.
pub fn strip_suffixes<'t>(word: &str, tables: &'t Tables) -> SuffixAnalysis<'t> {
    let mut stem = word.to_string();
    let mut suffixes = VecDeque::new();
    let mut stop = StripStop::PassLimit;

    for _ in 0..MAX_STRIP_PASSES {
        if tables.contains(&stem) {
            stop = StripStop::DictionaryStem;
            break;
        }
        let Some((rest, pair)) = match_suffix(&stem, tables) else {
            stop = StripStop::NoMatch;
            break;
        };
        stem = rest;
        suffixes.push_front(pair);
    }

    SuffixAnalysis {
        stem,
        suffixes,
        stop,
    }
}

/// Find the first rule (in table order) with a surface form that can be
/// stripped from `stem`. Within a rule, longer forms are tried first.
///
/// A candidate is skipped if it would leave fewer than [`MIN_STEM_CHARS`]
/// characters that are not themselves a dictionary word; the search then
/// continues with the next candidate and the next rules.
fn match_suffix<'t>(stem: &str, tables: &'t Tables) -> Option<(String, &'t HarmonyPair)> {
    for rule in tables.rules() {
        for surface in rule.surfaces() {
            let Some(rest) = stem.strip_suffix(surface.as_str()) else {
                continue;
            };
            if rest.chars().count() < MIN_STEM_CHARS && !tables.contains(rest) {
                continue;
            }
            debug!(stem, surface = surface.as_str(), rest, "suffix matched");
            return Some((rest.to_string(), rule.pair()));
        }
    }
    None
}

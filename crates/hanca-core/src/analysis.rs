// Suffix harmony pairs and translation traces

use crate::enums::Harmony;

/// A target-language suffix in its two harmony forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HarmonyPair {
    pub thick: String,
    pub thin: String,
}

impl HarmonyPair {
    pub fn new(thick: impl Into<String>, thin: impl Into<String>) -> Self {
        Self {
            thick: thick.into(),
            thin: thin.into(),
        }
    }

    /// The form agreeing with `harmony`.
    pub fn form(&self, harmony: Harmony) -> &str {
        match harmony {
            Harmony::Thick => &self.thick,
            Harmony::Thin => &self.thin,
        }
    }
}

/// How the root of a translated word was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootSource {
    /// The whole normalized word was a dictionary entry.
    WholeWord,
    /// The stem left after suffix stripping was a dictionary entry.
    DictionaryStem,
    /// The root was synthesized from the stem.
    Synthesized,
}

impl RootSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RootSource::WholeWord => "whole-word",
            RootSource::DictionaryStem => "dictionary-stem",
            RootSource::Synthesized => "synthesized",
        }
    }
}

/// Step-by-step record of one word translation.
///
/// Produced for inspection tooling; `output` is always identical to what
/// plain word translation returns for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrace {
    /// The input after normalization.
    pub normalized: String,
    /// Stem left after suffix stripping (equal to `normalized` on a
    /// whole-word dictionary hit).
    pub stem: String,
    pub root_source: RootSource,
    /// Root before any suffix is attached.
    pub root: String,
    /// Harmony derived from the root; `None` when no suffix was matched.
    pub harmony: Option<Harmony>,
    /// Matched suffix pairs, closest to the stem first.
    pub suffixes: Vec<HarmonyPair>,
    /// The suffix forms as actually appended, after elision.
    pub applied: Vec<String>,
    pub output: String,
}

impl WordTrace {
    /// Trace for input that normalizes to the empty string.
    pub fn empty() -> Self {
        Self {
            normalized: String::new(),
            stem: String::new(),
            root_source: RootSource::Synthesized,
            root: String::new(),
            harmony: None,
            suffixes: Vec::new(),
            applied: Vec::new(),
            output: String::new(),
        }
    }
}

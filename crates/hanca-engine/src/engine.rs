// HancaEngine: top-level integration point for Turkish-to-Hanca translation.
//
// Owns the dictionary and suffix tables and provides normalization, root
// generation, word, line and batch translation through a single interface.
//
// Design notes:
// - The engine is immutable after construction. Translation takes `&self`
//   and keeps all per-word state on the stack, so one engine can be shared
//   by any number of threads.
// - Root synthesis builds a fresh generator from each stem; there is no
//   shared random state.
// - Translation never fails. Errors only come from building tables.

use serde::Serialize;
use tracing::{debug, debug_span};

use hanca_core::analysis::{RootSource, WordTrace};
use hanca_core::case::{normalize, proper_name_line};
use hanca_core::token::split_line;

use crate::harmony::attach_suffixes;
use crate::morphology::strip_suffixes;
use crate::synthesis::synthesize_root;
use crate::tables::{TableError, Tables, parse_tables_toml};

/// Error type for engine construction failures.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The table overlay could not be parsed or failed validation.
    #[error("invalid table overlay: {0}")]
    Overlay(#[from] TableError),
}

/// One line of a batch together with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedLine {
    pub source: String,
    pub hanca: String,
}

/// Deterministic Turkish-to-Hanca translator.
#[derive(Debug, Clone)]
pub struct HancaEngine {
    tables: Tables,
}

impl Default for HancaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HancaEngine {
    /// Create an engine with the built-in tables.
    pub fn new() -> Self {
        Self::with_tables(Tables::builtin())
    }

    pub fn with_tables(tables: Tables) -> Self {
        Self { tables }
    }

    /// Create an engine with the built-in tables plus a TOML overlay.
    pub fn with_overlay(overlay_toml: &str) -> Result<Self, EngineError> {
        let overlay = parse_tables_toml(overlay_toml)?;
        let mut tables = Tables::builtin();
        tables.apply_overlay(&overlay);
        debug!(
            dictionary = tables.dictionary_len(),
            rules = tables.rules().len(),
            "overlay applied"
        );
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    // =========================================================================
    // Word-level operations
    // =========================================================================

    /// Canonical lowercase form used for every lookup.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    /// Root for a stem: its dictionary translation if it has one, otherwise
    /// a synthesized root. Same stem, same root.
    pub fn generate_root(&self, stem: &str) -> String {
        match self.tables.lookup(&normalize(stem)) {
            Some(translation) => translation.to_string(),
            None => synthesize_root(stem),
        }
    }

    /// Translate a single word. Empty input gives empty output.
    pub fn translate_word(&self, word: &str) -> String {
        self.analyze(word).output
    }

    /// Translate a single word and record every step.
    pub fn analyze(&self, word: &str) -> WordTrace {
        let normalized = normalize(word);
        let _span = debug_span!("translate_word", word = normalized.as_str()).entered();

        if normalized.is_empty() {
            return WordTrace::empty();
        }

        if let Some(translation) = self.tables.lookup(&normalized) {
            debug!(translation, "dictionary hit");
            return WordTrace {
                stem: normalized.clone(),
                normalized,
                root_source: RootSource::WholeWord,
                root: translation.to_string(),
                harmony: None,
                suffixes: Vec::new(),
                applied: Vec::new(),
                output: translation.to_string(),
            };
        }

        let analysis = strip_suffixes(&normalized, &self.tables);
        let (root, root_source) = match self.tables.lookup(&analysis.stem) {
            Some(translation) => (translation.to_string(), RootSource::DictionaryStem),
            None => (synthesize_root(&analysis.stem), RootSource::Synthesized),
        };
        let composition = attach_suffixes(&root, analysis.suffixes.iter().copied());
        debug!(
            stem = analysis.stem.as_str(),
            suffixes = analysis.suffixes.len(),
            output = composition.word.as_str(),
            "composed"
        );

        WordTrace {
            normalized,
            harmony: (!analysis.suffixes.is_empty()).then_some(composition.harmony),
            suffixes: analysis.suffixes.iter().map(|&p| p.clone()).collect(),
            stem: analysis.stem,
            root_source,
            root,
            applied: composition.applied,
            output: composition.word,
        }
    }

    // =========================================================================
    // Line and batch operations
    // =========================================================================

    /// Translate a line of text.
    ///
    /// With `is_proper_name`, tokens are only re-cased (see
    /// [`proper_name_line`]) and never translated. Otherwise each token's
    /// alphanumeric core is translated and its other characters are
    /// appended unchanged; tokens with no alphanumeric characters pass
    /// through as they are. Tokens are re-joined with single spaces.
    pub fn translate_line(&self, text: &str, is_proper_name: bool) -> String {
        if is_proper_name {
            return proper_name_line(text);
        }
        split_line(text)
            .into_iter()
            .map(|token| {
                if token.is_punctuation_only() {
                    token.raw
                } else {
                    let mut out = self.translate_word(&token.core);
                    out.push_str(&token.punctuation);
                    out
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Translate many lines, keeping input order.
    pub fn translate_lines<I, S>(&self, lines: I, is_proper_name: bool) -> Vec<TranslatedLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| {
                let source = line.as_ref();
                TranslatedLine {
                    source: source.to_string(),
                    hanca: self.translate_line(source, is_proper_name),
                }
            })
            .collect()
    }
}

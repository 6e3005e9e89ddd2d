// Dictionary and suffix rule tables
//
// Both tables are immutable once built and shared read-only by every
// translation. The built-in contents are embedded TOML; an overlay in the
// same format can extend them.

pub mod config;

use hashbrown::HashMap;

use hanca_core::analysis::HarmonyPair;
use hanca_core::case::normalize;

pub use config::{SuffixEntry, TableError, TableFile, parse_tables_toml};

/// Embedded default tables.
pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// One suffix rule: the source-language spellings it recognizes and the
/// harmony pair it translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// Normalized surface forms, longest first. Equal lengths keep their
    /// declaration order.
    surfaces: Vec<String>,
    pair: HarmonyPair,
}

impl SuffixRule {
    pub fn new<S: AsRef<str>>(surfaces: &[S], pair: HarmonyPair) -> Self {
        let mut surfaces: Vec<String> = surfaces.iter().map(|s| normalize(s.as_ref())).collect();
        surfaces.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        Self { surfaces, pair }
    }

    /// Surface forms in match order.
    pub fn surfaces(&self) -> &[String] {
        &self.surfaces
    }

    pub fn pair(&self) -> &HarmonyPair {
        &self.pair
    }
}

impl From<&SuffixEntry> for SuffixRule {
    fn from(entry: &SuffixEntry) -> Self {
        SuffixRule::new(
            entry.surface.as_slice(),
            HarmonyPair::new(entry.thick.as_str(), entry.thin.as_str()),
        )
    }
}

/// The word dictionary plus the ordered suffix rule table.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    dictionary: HashMap<String, String>,
    rules: Vec<SuffixRule>,
}

impl Tables {
    /// Build tables from a parsed table file. Dictionary keys are
    /// normalized on the way in.
    pub fn from_file(file: &TableFile) -> Self {
        let dictionary = file
            .dictionary
            .iter()
            .map(|(k, v)| (normalize(k), v.clone()))
            .collect();
        let rules = file.suffixes.iter().map(SuffixRule::from).collect();
        Self { dictionary, rules }
    }

    /// Parse and build tables from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_tables_toml(toml_str).map(|file| Self::from_file(&file))
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        // Covered by the parse_default_toml test.
        Self::from_toml(DEFAULT_TABLES_TOML).expect("built-in tables must be valid")
    }

    /// Layer an overlay on top of these tables.
    ///
    /// Overlay dictionary entries replace existing ones. Overlay suffix rules
    /// are tried before the existing rules, or replace them entirely when the
    /// overlay sets `replace_suffixes`.
    pub fn apply_overlay(&mut self, overlay: &TableFile) {
        for (k, v) in &overlay.dictionary {
            self.dictionary.insert(normalize(k), v.clone());
        }
        let mut rules: Vec<SuffixRule> = overlay.suffixes.iter().map(SuffixRule::from).collect();
        if !overlay.replace_suffixes {
            rules.append(&mut self.rules);
        }
        self.rules = rules;
    }

    /// Translation of a normalized word, if it is a dictionary entry.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.dictionary.get(normalized).map(String::as_str)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.dictionary.contains_key(normalized)
    }

    /// Suffix rules in match order.
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Iterate over all dictionary entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dictionary.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

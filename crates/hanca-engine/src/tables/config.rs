// TOML representation of the dictionary and suffix tables

use std::collections::BTreeMap;

use serde::Deserialize;

/// Table file contents as written on disk.
///
/// The same format serves both the embedded defaults and user overlays.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    #[serde(default)]
    pub dictionary: BTreeMap<String, String>,

    /// In an overlay, drop the built-in suffix rules instead of placing the
    /// overlay rules in front of them.
    #[serde(default)]
    pub replace_suffixes: bool,

    #[serde(default, rename = "suffix")]
    pub suffixes: Vec<SuffixEntry>,
}

/// One `[[suffix]]` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuffixEntry {
    pub surface: Vec<String>,
    pub thick: String,
    pub thin: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty dictionary key")]
    EmptyKey,
    #[error("empty translation for dictionary key: {0}")]
    EmptyTranslation(String),
    #[error("suffix rule {index} has no surface forms")]
    NoSurfaces { index: usize },
    #[error("suffix rule {index} has an empty surface form")]
    EmptySurface { index: usize },
    #[error("suffix rule {index} has an empty {form} form")]
    EmptyForm { index: usize, form: &'static str },
}

/// Parse and validate table TOML.
pub fn parse_tables_toml(toml_str: &str) -> Result<TableFile, TableError> {
    let file: TableFile =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    for (key, value) in &file.dictionary {
        if key.trim().is_empty() {
            return Err(TableError::EmptyKey);
        }
        if value.is_empty() {
            return Err(TableError::EmptyTranslation(key.clone()));
        }
    }

    for (index, entry) in file.suffixes.iter().enumerate() {
        if entry.surface.is_empty() {
            return Err(TableError::NoSurfaces { index });
        }
        if entry.surface.iter().any(|s| s.trim().is_empty()) {
            return Err(TableError::EmptySurface { index });
        }
        if entry.thick.is_empty() {
            return Err(TableError::EmptyForm { index, form: "thick" });
        }
        if entry.thin.is_empty() {
            return Err(TableError::EmptyForm { index, form: "thin" });
        }
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[dictionary]
ev = "dom"

[[suffix]]
surface = ["lar", "ler"]
thick = "ax"
thin = "ex"
"#;
        let file = parse_tables_toml(toml).unwrap();
        assert_eq!(file.dictionary["ev"], "dom");
        assert_eq!(file.suffixes.len(), 1);
        assert_eq!(file.suffixes[0].surface, ["lar", "ler"]);
        assert!(!file.replace_suffixes);
    }

    #[test]
    fn parse_default_toml() {
        let file = parse_tables_toml(super::super::DEFAULT_TABLES_TOML).unwrap();
        assert_eq!(file.dictionary.len(), 42);
        assert_eq!(file.suffixes.len(), 31);
        assert_eq!(file.dictionary["onların"], "xwaxon");
    }

    #[test]
    fn empty_file_is_valid() {
        let file = parse_tables_toml("").unwrap();
        assert!(file.dictionary.is_empty());
        assert!(file.suffixes.is_empty());
    }

    #[test]
    fn error_empty_translation() {
        let err = parse_tables_toml("[dictionary]\nev = \"\"\n").unwrap_err();
        assert!(matches!(err, TableError::EmptyTranslation(k) if k == "ev"));
    }

    #[test]
    fn error_no_surfaces() {
        let toml = "[[suffix]]\nsurface = []\nthick = \"a\"\nthin = \"e\"\n";
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NoSurfaces { index: 0 }));
    }

    #[test]
    fn error_empty_surface() {
        let toml = "[[suffix]]\nsurface = [\"lar\", \"\"]\nthick = \"a\"\nthin = \"e\"\n";
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptySurface { index: 0 }));
    }

    #[test]
    fn error_empty_form() {
        let toml = "[[suffix]]\nsurface = [\"lar\"]\nthick = \"ax\"\nthin = \"\"\n";
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyForm { index: 0, form: "thin" }));
    }

    #[test]
    fn error_unknown_field() {
        let err = parse_tables_toml("[[suffix]]\nsurface = [\"a\"]\nthick = \"x\"\nthin = \"y\"\nback = \"z\"\n")
            .unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_tables_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}

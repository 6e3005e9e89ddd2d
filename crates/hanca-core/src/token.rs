// Whitespace-delimited line tokens

/// One whitespace-separated token of an input line, split into its
/// alphanumeric core and the remaining characters.
///
/// Punctuation keeps its original relative order and is always carried
/// after the translated core: "(evler)," has core "evler" and
/// punctuation "(),".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// The token exactly as it appeared in the line.
    pub raw: String,

    /// Alphanumeric characters of the token, in order.
    pub core: String,

    /// Every other character of the token, in order.
    pub punctuation: String,
}

impl LineToken {
    /// Split a single whitespace-free token.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut core = String::with_capacity(raw.len());
        let mut punctuation = String::new();
        for c in raw.chars() {
            if c.is_alphanumeric() {
                core.push(c);
            } else {
                punctuation.push(c);
            }
        }
        Self {
            raw,
            core,
            punctuation,
        }
    }

    /// Whether the token has nothing to translate.
    pub fn is_punctuation_only(&self) -> bool {
        self.core.is_empty()
    }
}

/// Split a line on whitespace into [`LineToken`]s.
pub fn split_line(text: &str) -> Vec<LineToken> {
    text.split_whitespace().map(LineToken::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_punctuation() {
        let t = LineToken::new("Onlar!");
        assert_eq!(t.core, "Onlar");
        assert_eq!(t.punctuation, "!");
        assert!(!t.is_punctuation_only());
    }

    #[test]
    fn leading_and_embedded_punctuation() {
        let t = LineToken::new("(ev'ler),");
        assert_eq!(t.core, "evler");
        assert_eq!(t.punctuation, "('),");
    }

    #[test]
    fn digits_are_core() {
        let t = LineToken::new("2024'te");
        assert_eq!(t.core, "2024te");
        assert_eq!(t.punctuation, "'");
    }

    #[test]
    fn punctuation_only() {
        let t = LineToken::new("--");
        assert!(t.is_punctuation_only());
        assert_eq!(t.raw, "--");
    }

    #[test]
    fn split_line_on_any_whitespace() {
        let tokens = split_line(" ben\tsen  o ");
        let cores: Vec<&str> = tokens.iter().map(|t| t.core.as_str()).collect();
        assert_eq!(cores, ["ben", "sen", "o"]);
        assert!(split_line("   ").is_empty());
    }

    #[test]
    fn turkish_letters_are_alphanumeric() {
        let t = LineToken::new("\u{015F}\u{00FC}\u{0131}.");
        assert_eq!(t.core, "\u{015F}\u{00FC}\u{0131}");
        assert_eq!(t.punctuation, ".");
    }
}

// Shared enums: Harmony, ConsonantClass, CharClass

/// Vowel harmony class of a word or a vowel.
///
/// Suffixes come in a thick and a thin form; the form is chosen by the
/// class of the last vowel of the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Back vowels: A I O U Å.
    Thick,
    /// Front vowels: E İ Ö Ü Ä.
    Thin,
}

impl Harmony {
    pub fn as_str(self) -> &'static str {
        match self {
            Harmony::Thick => "thick",
            Harmony::Thin => "thin",
        }
    }
}

/// Articulation class of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantClass {
    Hard,
    Soft,
}

impl ConsonantClass {
    /// The other class. Synthesis alternates hard and soft in clusters.
    pub fn opposite(self) -> Self {
        match self {
            ConsonantClass::Hard => ConsonantClass::Soft,
            ConsonantClass::Soft => ConsonantClass::Hard,
        }
    }
}

/// Classification of a single character of the Hanca alphabet.
///
/// Every classified character belongs to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel(Harmony),
    Consonant(ConsonantClass),
}

impl CharClass {
    pub fn is_vowel(self) -> bool {
        matches!(self, CharClass::Vowel(_))
    }
}

// Seeded procedural root synthesis
//
// Stems without a dictionary entry get a made-up root. The root is built
// from alphabet units (a vowel, or a consonant which may be a multi-letter
// rare unit such as TS) using a generator seeded from the stem itself, so
// the same stem always yields the same root.
//
// Draw order is part of the output contract: length delta, harmony mode,
// start kind, then one or more draws per appended unit.

mod seed;

pub use seed::{rng_for_stem, stem_seed};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use hanca_core::case::normalize;
use hanca_core::character::{consonant_pool, turkish_lower, vowels};
use hanca_core::enums::{ConsonantClass, Harmony};

/// Shortest root, in units.
pub const MIN_ROOT_UNITS: usize = 3;

/// Longest root, in units.
pub const MAX_ROOT_UNITS: usize = 10;

/// Chance that a consonant is drawn from the rare pool.
const RARE_CONSONANT_P: f64 = 0.10;

/// Chance of a vowel after a consonant cluster.
const VOWEL_AFTER_CLUSTER_P: f64 = 0.95;

/// Chance of a vowel after a lone consonant (and the fallback after a
/// cluster).
const VOWEL_AFTER_CONSONANT_P: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Vowel(char),
    Consonant(&'static str, ConsonantClass),
}

impl Unit {
    fn is_vowel(self) -> bool {
        matches!(self, Unit::Vowel(_))
    }
}

fn draw_class(rng: &mut ChaCha8Rng) -> ConsonantClass {
    if rng.gen_bool(0.5) {
        ConsonantClass::Hard
    } else {
        ConsonantClass::Soft
    }
}

fn draw_consonant(rng: &mut ChaCha8Rng, class: ConsonantClass) -> Unit {
    let rare = rng.r#gen::<f64>() < RARE_CONSONANT_P;
    let pool = consonant_pool(class, rare);
    Unit::Consonant(pool[rng.gen_range(0..pool.len())], class)
}

fn draw_vowel(rng: &mut ChaCha8Rng, active: &'static [char]) -> Unit {
    Unit::Vowel(active[rng.gen_range(0..active.len())])
}

/// Synthesize a root for `stem`.
///
/// The generator is seeded from the normalized stem; the target length is
/// the character count of `stem` as given, moved by -1, 0 or +1 and clamped
/// to [`MIN_ROOT_UNITS`]..=[`MAX_ROOT_UNITS`]. The result is lowercase and
/// never contains two adjacent vowels.
///
/// This does not consult the dictionary; see `HancaEngine::generate_root`.
pub fn synthesize_root(stem: &str) -> String {
    let (units, harmony) = synthesize_units(stem);
    let root = render(&units);
    debug!(stem, %root, harmony = harmony.as_str(), "synthesized root");
    root
}

/// The unit sequence behind [`synthesize_root`], after the tail trim.
fn synthesize_units(stem: &str) -> (Vec<Unit>, Harmony) {
    let seed_text = normalize(stem);
    let mut rng = rng_for_stem(&seed_text);

    let delta: i64 = rng.gen_range(-1..=1);
    let base = stem.chars().count() as i64 + delta;
    let target = base.clamp(MIN_ROOT_UNITS as i64, MAX_ROOT_UNITS as i64) as usize;

    let harmony = if rng.gen_bool(0.5) {
        Harmony::Thick
    } else {
        Harmony::Thin
    };
    let active = vowels(harmony);

    let mut units: Vec<Unit> = Vec::with_capacity(target);
    if rng.gen_bool(0.5) {
        units.push(draw_vowel(&mut rng, active));
    } else {
        let class = draw_class(&mut rng);
        units.push(draw_consonant(&mut rng, class));
    }

    while units.len() < target {
        let next = match units[units.len() - 1] {
            Unit::Vowel(_) => {
                let class = draw_class(&mut rng);
                draw_consonant(&mut rng, class)
            }
            Unit::Consonant(_, class) => {
                // Treat the position before the first unit as a vowel.
                let after_cluster = units.len() > 1 && !units[units.len() - 2].is_vowel();
                let vowel_next = (after_cluster && rng.r#gen::<f64>() < VOWEL_AFTER_CLUSTER_P)
                    || rng.r#gen::<f64>() < VOWEL_AFTER_CONSONANT_P;
                if vowel_next {
                    draw_vowel(&mut rng, active)
                } else {
                    draw_consonant(&mut rng, class.opposite())
                }
            }
        };
        units.push(next);
    }

    trim_tail(&mut units);
    (units, harmony)
}

/// Drop the last unit once if the word ends in two consonants or two
/// vowels. Not repeated.
fn trim_tail(units: &mut Vec<Unit>) {
    let same_kind = matches!(units.as_slice(), [.., a, b] if a.is_vowel() == b.is_vowel());
    if same_kind {
        units.pop();
    }
}

fn render(units: &[Unit]) -> String {
    let mut out = String::with_capacity(units.len() * 2);
    for unit in units {
        match *unit {
            Unit::Vowel(v) => out.push(turkish_lower(v)),
            Unit::Consonant(text, _) => out.extend(text.chars().map(turkish_lower)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanca_core::character::{classify, is_vowel};

    const STEMS: &[&str] = &[
        "ev", "araba", "kitap", "g\u{00F6}z", "a\u{011F}a\u{00E7}", "\u{0131}\u{015F}\u{0131}k",
        "x", "pencerelerimizdekiler", "istanbul", "d\u{00FC}nya",
    ];

    #[test]
    fn deterministic() {
        for stem in STEMS {
            assert_eq!(synthesize_root(stem), synthesize_root(stem), "{stem}");
        }
    }

    #[test]
    fn case_of_stem_does_not_change_seed() {
        assert_eq!(synthesize_root("ARABA"), synthesize_root("araba"));
    }

    #[test]
    fn output_is_lowercase_alphabet() {
        for stem in STEMS {
            let root = synthesize_root(stem);
            for c in root.chars() {
                assert!(classify(c).is_some(), "{c} in {root}");
                assert_eq!(turkish_lower(c), c, "{root} not lowercase");
            }
        }
    }

    #[test]
    fn no_adjacent_vowels() {
        for stem in STEMS {
            let root: Vec<char> = synthesize_root(stem).chars().collect();
            for w in root.windows(2) {
                assert!(!(is_vowel(w[0]) && is_vowel(w[1])), "{root:?}");
            }
        }
    }

    #[test]
    fn single_harmony_class() {
        use hanca_core::character::vowel_harmony;
        for stem in STEMS {
            let root = synthesize_root(stem);
            let classes: Vec<Harmony> = root.chars().filter_map(vowel_harmony).collect();
            assert!(classes.windows(2).all(|w| w[0] == w[1]), "{root}");
        }
    }

    fn long_and_short_stems() -> Vec<String> {
        let mut stems: Vec<String> = STEMS.iter().map(|s| s.to_string()).collect();
        stems.extend(["a", "b", "\u{015F}", "ab"].map(String::from));
        stems.extend((12..=30).map(|n| "kitap".repeat(n / 5 + 1)[..n].to_string()));
        stems
    }

    #[test]
    fn length_is_clamped() {
        for stem in long_and_short_stems() {
            let (units, _) = synthesize_units(&stem);
            // The tail trim may take one unit off the clamped target.
            assert!(
                (MIN_ROOT_UNITS - 1..=MAX_ROOT_UNITS).contains(&units.len()),
                "{stem}: {} units",
                units.len()
            );
        }
    }

    #[test]
    fn long_stem_is_capped() {
        let stem = "a".repeat(20);
        let (units, _) = synthesize_units(&stem);
        assert!(units.len() <= MAX_ROOT_UNITS);
        assert!(units.len() >= MAX_ROOT_UNITS - 1);
    }

    #[test]
    fn one_char_stem_still_gets_a_root() {
        let (units, _) = synthesize_units("x");
        assert!(units.len() >= MIN_ROOT_UNITS - 1);
        assert!(units.len() <= MIN_ROOT_UNITS);
    }

    #[test]
    fn consonant_clusters_alternate_class() {
        for stem in long_and_short_stems() {
            let (units, _) = synthesize_units(&stem);
            for w in units.windows(2) {
                if let [Unit::Consonant(a, ca), Unit::Consonant(b, cb)] = w {
                    assert_eq!(*cb, ca.opposite(), "{stem}: {a} then {b}");
                }
            }
        }
    }

    #[test]
    fn vowels_follow_drawn_harmony() {
        for stem in long_and_short_stems() {
            let (units, harmony) = synthesize_units(&stem);
            for unit in &units {
                if let Unit::Vowel(v) = unit {
                    assert!(vowels(harmony).contains(v), "{stem}: {v}");
                }
            }
        }
    }

    #[test]
    fn trim_tail_drops_once() {
        let k = Unit::Consonant("K", ConsonantClass::Hard);
        let r = Unit::Consonant("R", ConsonantClass::Soft);
        let a = Unit::Vowel('A');
        let mut units = vec![a, k, r, k];
        trim_tail(&mut units);
        assert_eq!(units, vec![a, k, r]);

        let mut units = vec![k, a, k];
        trim_tail(&mut units);
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn render_splits_multi_letter_units() {
        let units = [
            Unit::Consonant("TS", ConsonantClass::Hard),
            Unit::Vowel('\u{0130}'),
            Unit::Consonant("\u{0393}", ConsonantClass::Soft),
        ];
        assert_eq!(render(&units), "tsi\u{03B3}");
    }
}

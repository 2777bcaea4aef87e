//! Transcript text normalization
//!
//! Three passes, in order: strip non-spacing combining marks after NFD
//! decomposition, replace anything outside the vocabulary with a space,
//! collapse space runs. The output therefore only ever contains
//! vocabulary symbols, which is what lets the metadata reader encode it
//! without hitting an out-of-vocabulary error.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::vocabulary::Vocabulary;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(" +").expect("static pattern"));

/// Non-spacing marks (category Mn) only. Spacing combining marks (Mc)
/// carry the Bengali dependent vowels and must survive stripping.
fn is_non_spacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}

/// Normalizes raw transcript text against a fixed vocabulary
pub struct TextNormalizer {
    out_of_vocabulary: Regex,
}

impl TextNormalizer {
    /// Build a normalizer for `vocabulary`
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let symbols: String = vocabulary.symbols().iter().collect();
        let pattern = format!("[^{}]", regex::escape(&symbols));
        Self {
            out_of_vocabulary: Regex::new(&pattern).expect("escaped symbol class"),
        }
    }

    /// Normalize `text` so it contains only vocabulary symbols.
    ///
    /// Mark stripping runs before vocabulary filtering, so dependent
    /// signs in category Mn (virama, candrabindu) are removed even
    /// though the vocabulary lists them, and the nukta letters decompose
    /// to their base consonants. Idempotent; runs of spaces collapse to
    /// one, but leading/trailing spaces are kept.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text.nfd().filter(|c| !is_non_spacing_mark(*c)).collect();
        let filtered = self.out_of_vocabulary.replace_all(&stripped, " ");
        SPACE_RUNS.replace_all(&filtered, " ").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Vocabulary::bengali())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::default()
    }

    #[test]
    fn test_keeps_vocabulary_text() {
        assert_eq!(normalizer().normalize("অআ কখ"), "অআ কখ");
    }

    #[test]
    fn test_strips_nukta_to_base_consonant() {
        // U+09DC decomposes to U+09A1 + nukta; the nukta is a
        // non-spacing mark and goes away.
        assert_eq!(normalizer().normalize("\u{09DC}"), "\u{09A1}");
    }

    #[test]
    fn test_strips_virama_and_candrabindu() {
        assert_eq!(normalizer().normalize("ক\u{09CD}ত"), "কত");
        assert_eq!(normalizer().normalize("চা\u{0981}দ"), "চাদ");
    }

    #[test]
    fn test_keeps_spacing_vowel_signs() {
        // Dependent vowels া ি ে are spacing marks (Mc), not Mn; only
        // the non-spacing category is stripped.
        let n = normalizer();
        assert_eq!(n.normalize("কি"), "কি");
        assert_eq!(n.normalize("মা"), "মা");
        assert_eq!(n.normalize("দে"), "দে");
    }

    #[test]
    fn test_replaces_out_of_vocabulary_with_space() {
        assert_eq!(normalizer().normalize("অxআ"), "অ আ");
        assert_eq!(normalizer().normalize("অ\tআ"), "অ আ");
        // Replacement is not trimmed, only collapsed.
        assert_eq!(normalizer().normalize("অ?"), "অ ");
    }

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(normalizer().normalize("অ    আ"), "অ আ");
        assert_eq!(normalizer().normalize("অ?! আ"), "অ আ");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        for text in ["অআ কখ", "অ?!x আ", "চা\u{0981}দ ক\u{09CD}ত", "  "] {
            let once = n.normalize(text);
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn test_output_is_vocabulary_only() {
        let vocab = Vocabulary::bengali();
        let out = normalizer().normalize("hello, অআ! ঢ়~");
        assert!(out.chars().all(|c| vocab.contains(c)));
        assert!(!out.contains("  "));
    }
}

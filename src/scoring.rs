// src/scoring.rs
//! Weighted occurrence scoring.
//!
//! score = Σ count(term) × weight, over every entry of the lexicon.
//! Plain per-term scans; fine for a handful of terms per polarity.

use crate::lexicon::Lexicon;

/// Polarity score of already-normalized text against one lexicon.
pub fn score(normalized: &str, lexicon: &Lexicon) -> u64 {
    if normalized.is_empty() {
        return 0;
    }
    lexicon
        .entries()
        .iter()
        .map(|e| e.count_in(normalized) as u64 * u64::from(e.weight()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconSet, MatchMode};
    use crate::normalize::normalize;

    #[test]
    fn empty_text_or_lexicon_scores_zero() {
        let set = LexiconSet::reference();
        assert_eq!(score("", set.hawkish()), 0);
        assert_eq!(score("rate hike", &Lexicon::default()), 0);
    }

    #[test]
    fn counts_are_multiplied_by_weight() {
        let set = LexiconSet::reference();
        let text = normalize("Another rate hike, then a second rate hike.");
        assert_eq!(score(&text, set.hawkish()), 4);
        assert_eq!(score(&text, set.dovish()), 0);
    }

    #[test]
    fn nested_terms_each_count() {
        // "elevated inflation" (2) also contains "inflation" (1)
        let set = LexiconSet::reference();
        assert_eq!(score("elevated inflation", set.hawkish()), 3);
    }

    #[test]
    fn hyphenated_term_never_scores() {
        let set = LexiconSet::reference();
        let text = normalize("Supply-demand pressures easing across sectors.");
        // normalized text has no hyphen; only "easing" (1) counts
        assert_eq!(score(&text, set.dovish()), 1);
    }

    #[test]
    fn whole_word_mode_skips_embedded_hits() {
        let lex = Lexicon::new([("ease", 2u32)], MatchMode::WholeWord).unwrap();
        let sub = Lexicon::new([("ease", 2u32)], MatchMode::Substring).unwrap();
        let text = normalize("Officials may ease; releases eased. Ease.");
        // whole word: "ease" twice; substring adds "releases" and "eased"
        assert_eq!(score(&text, &lex), 4);
        assert_eq!(score(&text, &sub), 8);
    }
}

// src/lexicon.rs
//! Hawkish/Dovish lexicons and their configuration.
//!
//! A lexicon maps a term (word or space-separated phrase) to a positive weight.
//! Terms are matched literally against normalized text (`[a-z ]` only), so a
//! term with characters outside that alphabet, such as the reference
//! `"supply-demand pressures easing"`, is kept as configured but never matches.
//!
//! Sources for [`LexiconSet::load_default`], first hit wins:
//! 1) `$FOMC_LEXICON_PATH`
//! 2) `config/lexicon.toml`
//! 3) `config/lexicon.json`
//! 4) built-in reference lexicon
//!
//! The set is built once at startup and shared read-only afterwards.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::normalize::normalize;

pub const ENV_LEXICON_PATH: &str = "FOMC_LEXICON_PATH";
pub const DEFAULT_LEXICON_TOML: &str = "config/lexicon.toml";
pub const DEFAULT_LEXICON_JSON: &str = "config/lexicon.json";

/// Reference hawkish terms and weights.
pub const REFERENCE_HAWKISH: &[(&str, u32)] = &[
    ("tighten", 1),
    ("inflation", 1),
    ("rate hike", 2),
    ("restrictive policy stance", 2),
    ("elevated inflation", 2),
    ("tight financial conditions", 2),
    ("labor market tightness", 1),
];

/// Reference dovish terms and weights.
pub const REFERENCE_DOVISH: &[(&str, u32)] = &[
    ("accommodative", 1),
    ("stimulus", 1),
    ("easing", 1),
    ("economic cooling", 2),
    ("slowing economic activity", 2),
    ("lower unemployment risks", 1),
    ("supply-demand pressures easing", 2),
];

static REFERENCE: Lazy<LexiconSet> = Lazy::new(|| {
    LexiconSet::from_pairs(REFERENCE_HAWKISH, REFERENCE_DOVISH, MatchMode::Substring)
        .expect("valid reference lexicon")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Hawkish,
    Dovish,
}

/// How a pattern is located in normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring count; `"rate"` also hits inside `"accelerate"`.
    #[default]
    Substring,
    /// Only occurrences bounded by text edges or spaces.
    WholeWord,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("term {term:?} has weight 0; weights must be positive")]
    ZeroWeight { term: String },
    #[error("empty term (weight {weight})")]
    EmptyTerm { weight: u32 },
    #[error("failed to compile matcher for {term:?}: {source}")]
    Matcher {
        term: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
enum Matcher {
    Substring,
    WholeWord(Regex),
}

/// One weighted term.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    term: String,
    weight: u32,
    matcher: Matcher,
}

impl LexiconEntry {
    pub fn new(term: impl Into<String>, weight: u32, mode: MatchMode) -> Result<Self, LexiconError> {
        let term = term.into();
        if weight == 0 {
            return Err(LexiconError::ZeroWeight { term });
        }
        if term.trim().is_empty() {
            return Err(LexiconError::EmptyTerm { weight });
        }
        if normalize(&term) != term {
            debug!(target: "lexicon", %term, "term is outside the normalized alphabet and cannot match");
        }
        let matcher = match mode {
            MatchMode::Substring => Matcher::Substring,
            MatchMode::WholeWord => {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(&term)))
                    .map_err(|source| LexiconError::Matcher {
                        term: term.clone(),
                        source,
                    })?;
                Matcher::WholeWord(re)
            }
        };
        Ok(Self {
            term,
            weight,
            matcher,
        })
    }

    /// Term as configured; searched for verbatim and used as the evidence key.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Non-overlapping, left-to-right occurrences in already-normalized text.
    pub fn count_in(&self, normalized: &str) -> usize {
        match &self.matcher {
            Matcher::Substring => normalized.matches(self.term.as_str()).count(),
            Matcher::WholeWord(re) => re.find_iter(normalized).count(),
        }
    }
}

/// A single polarity's term list, sorted by term.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new<I, S>(terms: I, mode: MatchMode) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut entries = terms
            .into_iter()
            .map(|(t, w)| LexiconEntry::new(t, w, mode))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by(|a, b| a.term.cmp(&b.term));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight_of(&self, term: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.weight)
    }

    /// `term -> weight` view, e.g. for config round-trips and the `/lexicon` endpoint.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.entries
            .iter()
            .map(|e| (e.term.clone(), e.weight))
            .collect()
    }
}

/// On-disk shape (TOML or JSON).
///
/// ```toml
/// match_mode = "substring"   # or "whole_word"
///
/// [hawkish]
/// "rate hike" = 2
///
/// [dovish]
/// "easing" = 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub hawkish: BTreeMap<String, u32>,
    #[serde(default)]
    pub dovish: BTreeMap<String, u32>,
}

/// Both lexicons plus the match mode they were built with.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    hawkish: Lexicon,
    dovish: Lexicon,
    match_mode: MatchMode,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self::reference()
    }
}

impl LexiconSet {
    /// Built-in reference lexicon (substring matching).
    pub fn reference() -> Self {
        REFERENCE.clone()
    }

    /// Reference terms and weights under a different match mode.
    pub fn reference_with_mode(mode: MatchMode) -> Result<Self, LexiconError> {
        Self::from_pairs(REFERENCE_HAWKISH, REFERENCE_DOVISH, mode)
    }

    pub fn new(hawkish: Lexicon, dovish: Lexicon, match_mode: MatchMode) -> Self {
        Self {
            hawkish,
            dovish,
            match_mode,
        }
    }

    pub fn from_pairs(
        hawkish: &[(&str, u32)],
        dovish: &[(&str, u32)],
        mode: MatchMode,
    ) -> Result<Self, LexiconError> {
        Ok(Self::new(
            Lexicon::new(hawkish.iter().copied(), mode)?,
            Lexicon::new(dovish.iter().copied(), mode)?,
            mode,
        ))
    }

    pub fn from_config(cfg: LexiconConfig) -> Result<Self> {
        if cfg.hawkish.is_empty() && cfg.dovish.is_empty() {
            bail!("lexicon config defines no hawkish and no dovish terms");
        }
        let mode = cfg.match_mode;
        let hawkish = Lexicon::new(cfg.hawkish, mode).context("invalid [hawkish] lexicon")?;
        let dovish = Lexicon::new(cfg.dovish, mode).context("invalid [dovish] lexicon")?;
        Ok(Self::new(hawkish, dovish, mode))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: LexiconConfig = toml::from_str(s).context("parsing lexicon TOML")?;
        Self::from_config(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: LexiconConfig = serde_json::from_str(s).context("parsing lexicon JSON")?;
        Self::from_config(cfg)
    }

    /// Load from an explicit path; `.json` is parsed as JSON, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let set = if ext == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("loading lexicon from {}", path.display()))?;

        info!(
            target: "lexicon",
            path = %path.display(),
            hawkish = set.hawkish.len(),
            dovish = set.dovish.len(),
            mode = ?set.match_mode,
            "lexicon loaded"
        );
        Ok(set)
    }

    /// Load using env var + fallbacks (see module docs).
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_LEXICON_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!(
                "{ENV_LEXICON_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        for candidate in [DEFAULT_LEXICON_TOML, DEFAULT_LEXICON_JSON] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Self::load_from(&pb);
            }
        }
        info!(target: "lexicon", "no lexicon config found, using reference lexicon");
        Ok(Self::reference())
    }

    pub fn get(&self, polarity: Polarity) -> &Lexicon {
        match polarity {
            Polarity::Hawkish => &self.hawkish,
            Polarity::Dovish => &self.dovish,
        }
    }

    pub fn hawkish(&self) -> &Lexicon {
        &self.hawkish
    }

    pub fn dovish(&self) -> &Lexicon {
        &self.dovish
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn to_config(&self) -> LexiconConfig {
        LexiconConfig {
            match_mode: self.match_mode,
            hawkish: self.hawkish.to_map(),
            dovish: self.dovish.to_map(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lists_are_verbatim() {
        let set = LexiconSet::reference();
        assert_eq!(set.hawkish().len(), 7);
        assert_eq!(set.dovish().len(), 7);
        assert_eq!(set.hawkish().weight_of("rate hike"), Some(2));
        assert_eq!(set.hawkish().weight_of("labor market tightness"), Some(1));
        assert_eq!(set.dovish().weight_of("supply-demand pressures easing"), Some(2));
        assert_eq!(set.match_mode(), MatchMode::Substring);
        assert_eq!(set.get(Polarity::Hawkish).weight_of("tighten"), Some(1));
        assert_eq!(set.get(Polarity::Dovish).weight_of("tighten"), None);
    }

    #[test]
    fn hyphenated_term_is_kept_verbatim_and_never_matches() {
        let text = normalize("Supply-demand pressures easing; supplydemand pressures easing.");
        for mode in [MatchMode::Substring, MatchMode::WholeWord] {
            let e = LexiconEntry::new("supply-demand pressures easing", 2, mode).unwrap();
            assert_eq!(e.term(), "supply-demand pressures easing");
            assert_eq!(e.count_in(&text), 0, "{mode:?}");
        }
    }

    #[test]
    fn rejects_zero_weight_and_empty_term() {
        assert!(matches!(
            LexiconEntry::new("stimulus", 0, MatchMode::Substring),
            Err(LexiconError::ZeroWeight { .. })
        ));
        assert!(matches!(
            LexiconEntry::new("  ", 1, MatchMode::Substring),
            Err(LexiconError::EmptyTerm { .. })
        ));
    }

    #[test]
    fn substring_vs_whole_word_counting() {
        let text = normalize("Rates accelerate; the rate is set. Rate.");
        let sub = LexiconEntry::new("rate", 1, MatchMode::Substring).unwrap();
        let whole = LexiconEntry::new("rate", 1, MatchMode::WholeWord).unwrap();
        // "rates", "accelerate", "rate", "rate"
        assert_eq!(sub.count_in(&text), 4);
        assert_eq!(whole.count_in(&text), 2);
    }

    #[test]
    fn whole_word_finds_match_after_rejected_prefix() {
        let e = LexiconEntry::new("a a", 1, MatchMode::WholeWord).unwrap();
        assert_eq!(e.count_in("xa a a"), 1);
    }

    #[test]
    fn substring_count_is_non_overlapping() {
        let e = LexiconEntry::new("aa", 1, MatchMode::Substring).unwrap();
        assert_eq!(e.count_in("aaaa"), 2);
        assert_eq!(e.count_in("aaa"), 1);
    }

    #[test]
    fn toml_config_parses_with_mode() {
        let toml = r#"
match_mode = "whole_word"

[hawkish]
"rate hike" = 3

[dovish]
easing = 1
"#;
        let set = LexiconSet::from_toml_str(toml).unwrap();
        assert_eq!(set.match_mode(), MatchMode::WholeWord);
        assert_eq!(set.hawkish().weight_of("rate hike"), Some(3));
        assert_eq!(set.dovish().len(), 1);
    }

    #[test]
    fn json_config_defaults_to_substring() {
        let set = LexiconSet::from_json_str(r#"{"hawkish":{"tighten":1}}"#).unwrap();
        assert_eq!(set.match_mode(), MatchMode::Substring);
        assert!(set.dovish().is_empty());
    }

    #[test]
    fn empty_config_is_rejected() {
        assert!(LexiconSet::from_toml_str("").is_err());
        assert!(LexiconSet::from_toml_str("[hawkish]\ntighten = 0\n").is_err());
    }

    #[test]
    fn config_round_trip_keeps_terms() {
        let cfg = LexiconSet::reference().to_config();
        let again = LexiconSet::from_config(cfg.clone()).unwrap().to_config();
        assert_eq!(cfg, again);
    }
}

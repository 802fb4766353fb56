// src/classifier.rs
//! Stance classifier: normalize once, score both lexicons, compare.
//!
//! hawkish > dovish → Hawkish, dovish > hawkish → Dovish, otherwise Neutral
//! (including 0/0, i.e. nothing matched).

use metrics::counter;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::evidence::Evidence;
use crate::lexicon::LexiconSet;
use crate::loader::{load_document, DocumentFormat};
use crate::normalize::normalize;
use crate::scoring::score;
use crate::wordfreq::{word_frequencies, WordCount, DEFAULT_TOP_WORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    Hawkish,
    Dovish,
    Neutral,
}

impl Stance {
    pub fn from_scores(hawkish: u64, dovish: u64) -> Self {
        use std::cmp::Ordering::*;
        match hawkish.cmp(&dovish) {
            Greater => Stance::Hawkish,
            Less => Stance::Dovish,
            Equal => Stance::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Hawkish => "Hawkish",
            Stance::Dovish => "Dovish",
            Stance::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the two scores it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Stance,
    pub hawkish_score: u64,
    pub dovish_score: u64,
}

impl Classification {
    pub fn from_scores(hawkish_score: u64, dovish_score: u64) -> Self {
        Self {
            label: Stance::from_scores(hawkish_score, dovish_score),
            hawkish_score,
            dovish_score,
        }
    }
}

/// Everything the presentation layer renders for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub classification: Classification,
    pub evidence: Evidence,
    pub top_words: Vec<WordCount>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    lexicons: LexiconSet,
    top_words: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(LexiconSet::reference())
    }
}

impl Classifier {
    pub fn new(lexicons: LexiconSet) -> Self {
        Self {
            lexicons,
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    /// Number of words reported in `Report::top_words`.
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    pub fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    pub fn classify_normalized(&self, normalized: &str) -> Classification {
        Classification::from_scores(
            score(normalized, self.lexicons.hawkish()),
            score(normalized, self.lexicons.dovish()),
        )
    }

    /// Total: empty text is simply Neutral with zero scores.
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_normalized(&normalize(text))
    }

    /// Guarded entry for loader output: refuses empty/whitespace-only text.
    pub fn analyze(&self, text: &str) -> AnalysisResult<Report> {
        if text.trim().is_empty() {
            counter!("classify_refused_total", "reason" => "no_extractable_text").increment(1);
            return Err(AnalysisError::NoExtractableText);
        }

        let normalized = normalize(text);
        let classification = self.classify_normalized(&normalized);
        let evidence = Evidence::collect(&normalized, &self.lexicons);
        let top_words = word_frequencies(&normalized, self.top_words);

        counter!("classify_total", "label" => classification.label.as_str()).increment(1);
        // Never log raw text. Only hashed id + scores.
        debug!(
            target: "classifier",
            id = %anon_hash(text),
            label = %classification.label,
            hawkish = classification.hawkish_score,
            dovish = classification.dovish_score,
            terms = evidence.hawkish.len() + evidence.dovish.len(),
            "document classified"
        );

        Ok(Report {
            classification,
            evidence,
            top_words,
        })
    }

    /// Load + analyze; loader errors propagate unchanged.
    pub fn analyze_document(&self, bytes: &[u8], format: DocumentFormat) -> AnalysisResult<Report> {
        let text = load_document(bytes, format).inspect_err(|e| {
            counter!("classify_refused_total", "reason" => e.code()).increment(1);
        })?;
        self.analyze(&text)
    }
}

/// Classify with the built-in reference lexicon.
pub fn classify(text: &str) -> Classification {
    Classifier::default().classify(text)
}

/// Short, stable, anonymized document id for logs.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

// src/wordfreq.rs
//! Word counts behind the dashboard's word cloud.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOP_WORDS: usize = 25;
const MIN_WORD_LEN: usize = 3;

/// Common English function words; never shown in the cloud.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "and", "any", "are", "been", "before",
    "being", "below", "between", "both", "but", "can", "could", "did", "does", "doing", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "her",
    "here", "hers", "him", "his", "how", "into", "its", "itself", "just", "more", "most", "not",
    "now", "off", "once", "only", "other", "our", "ours", "out", "over", "own", "same", "she",
    "should", "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "too", "under", "until", "very", "was", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Top `limit` words of normalized text: count desc, then word asc.
pub fn word_frequencies(normalized: &str, limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in normalized.split(' ') {
        if w.len() < MIN_WORD_LEN || STOPWORDS.contains(&w) {
            continue;
        }
        *counts.entry(w).or_insert(0) += 1;
    }

    let mut out: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    out.truncate(limit);
    out
}

// src/evidence.rs
//! Per-term occurrence counts for display next to the verdict.
//! Uses the same counting as scoring, so evidence × weight always sums to the score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lexicon::{Lexicon, LexiconSet};

/// Term (as configured) → occurrence count; zero counts are omitted.
pub type EvidenceMap = BTreeMap<String, usize>;

pub fn evidence(normalized: &str, lexicon: &Lexicon) -> EvidenceMap {
    lexicon
        .entries()
        .iter()
        .filter_map(|e| {
            let n = e.count_in(normalized);
            (n > 0).then(|| (e.term().to_string(), n))
        })
        .collect()
}

/// Evidence for both polarities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub hawkish: EvidenceMap,
    pub dovish: EvidenceMap,
}

impl Evidence {
    pub fn collect(normalized: &str, lexicons: &LexiconSet) -> Self {
        Self {
            hawkish: evidence(normalized, lexicons.hawkish()),
            dovish: evidence(normalized, lexicons.dovish()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hawkish.is_empty() && self.dovish.is_empty()
    }
}

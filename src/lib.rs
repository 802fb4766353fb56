// src/lib.rs
// Public library surface for the service binary, demos and integration tests.

pub mod api;
pub mod classifier;
pub mod error;
pub mod evidence;
pub mod lexicon;
pub mod loader;
pub mod metrics;
pub mod normalize;
pub mod scoring;
pub mod wordfreq;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::classifier::{classify, Classification, Classifier, Report, Stance};
pub use crate::error::{AnalysisError, AnalysisResult};
pub use crate::evidence::{evidence, Evidence, EvidenceMap};
pub use crate::lexicon::{Lexicon, LexiconConfig, LexiconSet, MatchMode, Polarity};
pub use crate::loader::{load_document, load_path, DocumentFormat};
pub use crate::normalize::normalize;
pub use crate::scoring::score;
pub use crate::wordfreq::{word_frequencies, WordCount};

// src/error.rs
use thiserror::Error;

/// Conditions surfaced to callers of the analysis pipeline.
///
/// A Neutral verdict is a valid outcome and is never represented here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no text could be extracted from the document")]
    NoExtractableText,

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),
}

impl AnalysisError {
    /// Stable machine-readable code (API error bodies, metric labels).
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::NoExtractableText => "no_extractable_text",
            AnalysisError::UnsupportedFormat(_) => "unsupported_format",
            AnalysisError::ExtractionFailed(_) => "extraction_failed",
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

// src/loader.rs
//! Document loader: uploaded bytes + declared format → raw UTF-8 text.
//!
//! - `text`: strict UTF-8 decode.
//! - `pdf`:  lopdf, pages in page-number order, concatenated.
//!
//! Loader failures are returned as-is; retrying a malformed document cannot help.
//! An empty result is not an error here, the classifier refuses it.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{AnalysisError, AnalysisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Pdf,
}

impl DocumentFormat {
    /// Infer the format from a file name extension (`.txt`, `.pdf`).
    pub fn from_file_name(name: &str) -> AnalysisResult<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            _ => Err(AnalysisError::UnsupportedFormat(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Text => "text",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract raw text from document bytes of a declared format.
pub fn load_document(bytes: &[u8], format: DocumentFormat) -> AnalysisResult<String> {
    let text = match format {
        DocumentFormat::Text => decode_text(bytes)?,
        DocumentFormat::Pdf => extract_pdf_text(bytes)?,
    };
    debug!(
        target: "loader",
        %format,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "document loaded"
    );
    Ok(text)
}

/// Read a local file and infer its format from the extension.
pub fn load_path(path: &Path) -> AnalysisResult<String> {
    let name = path.to_string_lossy();
    let format = DocumentFormat::from_file_name(&name)?;
    load_path_as(path, format)
}

/// Read a local file with an explicit format.
pub fn load_path_as(path: &Path, format: DocumentFormat) -> AnalysisResult<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        AnalysisError::ExtractionFailed(format!("reading {}: {e}", path.display()))
    })?;
    load_document(&bytes, format)
}

fn decode_text(bytes: &[u8]) -> AnalysisResult<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| AnalysisError::ExtractionFailed(format!("text is not valid UTF-8: {e}")))
}

fn extract_pdf_text(bytes: &[u8]) -> AnalysisResult<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| AnalysisError::ExtractionFailed(format!("failed to load PDF: {e}")))?;

    // BTreeMap keyed by page number, so iteration is document order.
    let pages = doc.get_pages();
    let mut out = String::new();
    for &page_num in pages.keys() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => {
                out.push_str(&text);
                // keep the last word of a page apart from the first of the next
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push('\n');
                }
            }
            Err(e) => {
                warn!(target: "loader", page = page_num, error = %e, "skipping unreadable PDF page");
            }
        }
    }
    Ok(out)
}

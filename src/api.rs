// src/api.rs
//! HTTP surface for the dashboard.
//!
//! - `GET  /health`     → "OK"
//! - `GET  /lexicon`    → both lexicons + match mode
//! - `POST /classify`   → `{ "text": ... }` → Report
//! - `POST /documents`  → raw body, `?format=text|pdf` or `?filename=minutes.pdf` → Report
//!
//! Error bodies are `{ "error": code, "message": text }`; a Neutral verdict is always 200.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::classifier::{Classifier, Report};
use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::{LexiconConfig, LexiconSet};
use crate::loader::DocumentFormat;

/// Upload cap for `/documents` (long minutes PDFs exceed axum's 2 MB default).
pub const MAX_DOCUMENT_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    classifier: Arc<Classifier>,
}

impl AppState {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Lexicon from `$FOMC_LEXICON_PATH` / `config/` / built-in reference.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(Classifier::new(LexiconSet::load_default()?)))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/lexicon", get(lexicon))
        .route("/classify", post(classify))
        .route("/documents", post(documents))
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::NoExtractableText => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AnalysisError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let message = match self {
            AnalysisError::NoExtractableText => {
                "No text could be extracted from the uploaded document. \
                 Please ensure it contains readable text."
                    .to_string()
            }
            ref other => other.to_string(),
        };
        info!(target: "api", code = self.code(), status = status.as_u16(), "request refused");
        (
            status,
            Json(ErrorBody {
                error: self.code(),
                message,
            }),
        )
            .into_response()
    }
}

async fn lexicon(State(state): State<AppState>) -> Json<LexiconConfig> {
    Json(state.classifier.lexicons().to_config())
}

#[derive(Deserialize)]
struct ClassifyReq {
    text: String,
}

async fn classify(
    State(state): State<AppState>,
    Json(body): Json<ClassifyReq>,
) -> Result<Json<Report>, AnalysisError> {
    state.classifier.analyze(&body.text).map(Json)
}

#[derive(Debug, Default, Deserialize)]
struct DocumentQuery {
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

fn resolve_format(q: &DocumentQuery) -> AnalysisResult<DocumentFormat> {
    match (&q.format, &q.filename) {
        (Some(f), _) => f.parse(),
        (None, Some(name)) => DocumentFormat::from_file_name(name),
        (None, None) => Err(AnalysisError::UnsupportedFormat(
            "missing format (pass ?format= or ?filename=)".to_string(),
        )),
    }
}

async fn documents(
    State(state): State<AppState>,
    Query(q): Query<DocumentQuery>,
    body: Bytes,
) -> Result<Json<Report>, AnalysisError> {
    let format = resolve_format(&q)?;
    let classifier = state.classifier.clone();
    // PDF parsing is CPU-bound; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || classifier.analyze_document(&body, format))
        .await
        .map_err(|e| AnalysisError::ExtractionFailed(format!("extraction task failed: {e}")))??;
    Ok(Json(report))
}

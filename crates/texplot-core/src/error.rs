use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TexplotError {
    #[error("malformed table row (expected {expected} cells, found {found}): '{row}'")]
    MalformedRow {
        expected: usize,
        found: usize,
        row: String,
    },

    #[error("failed to read report {path}: {reason}")]
    ReportLoad { path: PathBuf, reason: String },

    #[error("failed to load model order from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("unknown model '{model}' (not listed in the model order file)")]
    UnknownModel { model: String },

    #[error("figure output needs exactly a subject and a control series, found {found} series")]
    FigureSeries { found: usize },

    #[error("coordinate output assigns letter indices a-z and supports at most 26 models, got {count}")]
    TooManyModels { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

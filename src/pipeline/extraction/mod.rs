pub mod date;
pub mod extractor;
pub mod label_correction;
pub mod orchestrator;
pub mod patterns;
pub mod sanitize;
pub mod text_source;
pub mod types;

pub use date::*;
pub use extractor::*;
pub use orchestrator::*;
pub use sanitize::*;
pub use text_source::*;
pub use types::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The upstream text step failed; surfaced as-is, never retried.
    #[error("Text unavailable for '{document}': {reason}")]
    TextUnavailable { document: String, reason: String },

    #[error("Could not find any recognizable lab values in the document")]
    NoBiomarkersFound,

    #[error("Unparseable report date: {0}")]
    UnparseableDate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Document too large: {path} ({size} bytes)")]
    DocumentTooLarge { path: PathBuf, size: u64 },

    #[error("Document contains no text")]
    EmptyDocument,
}

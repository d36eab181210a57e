//! Domain types shared by the extractor, the classifier and the history.

pub mod biomarker;
pub mod enums;
pub mod measurement;

pub use biomarker::Biomarker;
pub use enums::{RiskDirection, RiskTier, Trend};
pub use measurement::{ExtractedValues, MeasurementRecord};

use thiserror::Error;

/// Errors raised at the string boundary (dashboard keys, serialized enums).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown biomarker key: {0}")]
    UnknownBiomarker(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

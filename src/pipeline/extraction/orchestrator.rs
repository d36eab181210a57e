use chrono::{Local, NaiveDate};

use super::extractor::extract_at;
use super::label_correction::correct_label_terms;
use super::sanitize::normalize_report_text;
use super::types::{DocumentHandle, TextSource};
use super::ExtractionError;
use crate::models::MeasurementRecord;

/// Upload flow: document → text → measurement record.
/// Uses a trait object for the text step, enabling dependency injection.
pub struct ReportParser {
    source: Box<dyn TextSource + Send + Sync>,
}

impl ReportParser {
    pub fn new(source: Box<dyn TextSource + Send + Sync>) -> Self {
        Self { source }
    }

    pub fn parse_document(&self, document: &DocumentHandle) -> Result<MeasurementRecord, ExtractionError> {
        self.parse_document_at(document, Local::now().date_naive())
    }

    /// Parse with an explicit fallback date for reports without one.
    pub fn parse_document_at(
        &self,
        document: &DocumentHandle,
        fallback_date: NaiveDate,
    ) -> Result<MeasurementRecord, ExtractionError> {
        tracing::info!(
            document_id = %document.id,
            name = %document.name,
            "Starting report parsing"
        );

        let raw = self.source.read_text(document).map_err(|e| match e {
            ExtractionError::TextUnavailable { .. } => e,
            other => ExtractionError::TextUnavailable {
                document: document.name.clone(),
                reason: other.to_string(),
            },
        })?;
        tracing::info!(document_id = %document.id, text_len = raw.len(), "Extracted text");

        let text = prepare_text(&raw);
        match extract_at(&text, fallback_date) {
            Ok(record) => {
                tracing::info!(
                    document_id = %document.id,
                    date = %record.date,
                    "Parsed measurement record"
                );
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(document_id = %document.id, error = %e, "Report parsing failed");
                Err(e)
            }
        }
    }
}

/// Normalise whitespace and repair OCR-damaged labels.
pub fn prepare_text(raw: &str) -> String {
    correct_label_terms(&normalize_report_text(raw))
}

use chrono::{Local, NaiveDate};

use super::date::extract_report_date;
use super::patterns::{PatternRule, BIOMARKER_PATTERNS};
use super::ExtractionError;
use crate::models::{ExtractedValues, MeasurementRecord};

/// Extract a complete measurement record from report text.
///
/// Falls back to today's date when the report carries no usable date.
/// Fails with [`ExtractionError::NoBiomarkersFound`] when not a single
/// biomarker could be read.
pub fn extract(text: &str) -> Result<MeasurementRecord, ExtractionError> {
    extract_at(text, Local::now().date_naive())
}

/// Like [`extract`], with an explicit fallback date.
pub fn extract_at(text: &str, fallback_date: NaiveDate) -> Result<MeasurementRecord, ExtractionError> {
    let values = extract_values(text);
    if values.is_empty() {
        tracing::warn!(text_len = text.len(), "No biomarkers found in report text");
        return Err(ExtractionError::NoBiomarkersFound);
    }

    let date = extract_report_date(text).unwrap_or_else(|| {
        tracing::info!(%fallback_date, "No report date found, using processing date");
        fallback_date
    });

    tracing::info!(
        date = %date,
        biomarkers_found = values.matched_count(),
        "Extracted measurement record"
    );

    Ok(MeasurementRecord::from_values(date, &values))
}

/// Read every biomarker independently; unmatched ones stay `None`.
pub fn extract_values(text: &str) -> ExtractedValues {
    let mut values = ExtractedValues::default();
    for patterns in BIOMARKER_PATTERNS.iter() {
        if let Some(value) = first_valid_value(text, &patterns.rules) {
            tracing::debug!(biomarker = patterns.biomarker.key(), value, "Biomarker extracted");
            values.set(patterns.biomarker, value);
        }
    }
    values
}

/// First rule whose capture parses to a finite, strictly positive number.
fn first_valid_value(text: &str, rules: &[PatternRule]) -> Option<f64> {
    rules.iter().find_map(|rule| {
        let raw = rule.first_capture(text)?;
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Some(value),
            _ => {
                tracing::debug!(raw, "Ignoring non-positive or malformed capture");
                None
            }
        }
    })
}

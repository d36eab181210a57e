use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Biomarker;

/// Biomarker values as found in a report, before zero-filling.
///
/// `None` means the report did not mention the biomarker (or only with a
/// non-positive value). Kept separate from [`MeasurementRecord`] so that
/// "absent" stays distinguishable until the record is materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedValues {
    values: [Option<f64>; 8],
}

impl ExtractedValues {
    pub fn get(&self, biomarker: Biomarker) -> Option<f64> {
        self.values[biomarker.index()]
    }

    pub fn set(&mut self, biomarker: Biomarker, value: f64) {
        self.values[biomarker.index()] = Some(value);
    }

    /// Number of distinct biomarkers with a value.
    pub fn matched_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_count() == 0
    }
}

/// One dated snapshot of all eight biomarkers.
///
/// Biomarkers absent from the source report are stored as `0.0`; a zero is
/// therefore indistinguishable from "not reported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub date: NaiveDate,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub ldl_cholesterol: f64,
    pub triglycerides: f64,
    pub creatinine: f64,
    #[serde(rename = "vitaminD")]
    pub vitamin_d: f64,
    #[serde(rename = "vitaminB12")]
    pub vitamin_b12: f64,
    #[serde(rename = "hba1c")]
    pub hba1c: f64,
}

impl MeasurementRecord {
    /// Materialize a record, zero-filling every biomarker without a value.
    pub fn from_values(date: NaiveDate, values: &ExtractedValues) -> Self {
        let v = |b: Biomarker| values.get(b).unwrap_or(0.0);
        Self {
            date,
            total_cholesterol: v(Biomarker::TotalCholesterol),
            hdl_cholesterol: v(Biomarker::HdlCholesterol),
            ldl_cholesterol: v(Biomarker::LdlCholesterol),
            triglycerides: v(Biomarker::Triglycerides),
            creatinine: v(Biomarker::Creatinine),
            vitamin_d: v(Biomarker::VitaminD),
            vitamin_b12: v(Biomarker::VitaminB12),
            hba1c: v(Biomarker::Hba1c),
        }
    }

    pub fn value(&self, biomarker: Biomarker) -> f64 {
        match biomarker {
            Biomarker::TotalCholesterol => self.total_cholesterol,
            Biomarker::HdlCholesterol => self.hdl_cholesterol,
            Biomarker::LdlCholesterol => self.ldl_cholesterol,
            Biomarker::Triglycerides => self.triglycerides,
            Biomarker::Creatinine => self.creatinine,
            Biomarker::VitaminD => self.vitamin_d,
            Biomarker::VitaminB12 => self.vitamin_b12,
            Biomarker::Hba1c => self.hba1c,
        }
    }

    /// Zero-filled fields were absent from the source report.
    pub fn is_reported(&self, biomarker: Biomarker) -> bool {
        self.value(biomarker) != 0.0
    }

    /// ISO-8601 date string (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intelligence::{reference_table, ReferenceRange};
use crate::models::{Biomarker, MeasurementRecord};

/// Measurement records kept sorted ascending by date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementHistory {
    records: Vec<MeasurementRecord>,
}

impl MeasurementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in any order.
    pub fn from_records(records: impl IntoIterator<Item = MeasurementRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.insert(record);
        }
        history
    }

    /// Insert keeping date order. A record dated the same day as existing
    /// ones goes after them.
    pub fn insert(&mut self, record: MeasurementRecord) {
        let at = self.records.partition_point(|r| r.date <= record.date);
        tracing::debug!(date = %record.date, position = at, "Inserting measurement record");
        self.records.insert(at, record);
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&MeasurementRecord> {
        self.records.last()
    }

    /// The record before the latest one.
    pub fn previous(&self) -> Option<&MeasurementRecord> {
        self.records.len().checked_sub(2).map(|i| &self.records[i])
    }

    /// Chart data for one biomarker across the whole history.
    pub fn series(&self, biomarker: Biomarker) -> BiomarkerSeries {
        BiomarkerSeries {
            biomarker,
            label: biomarker.label().to_string(),
            range: reference_table().get(biomarker).clone(),
            points: self
                .records
                .iter()
                .map(|r| SeriesPoint {
                    date: r.date,
                    value: r.value(biomarker),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One biomarker over time, with the reference range for drawing bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomarkerSeries {
    pub biomarker: Biomarker,
    pub label: String,
    pub range: ReferenceRange,
    pub points: Vec<SeriesPoint>,
}

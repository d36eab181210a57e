use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::history::MeasurementHistory;
use super::trend::{compute_trend, percent_change};
use crate::intelligence::classify;
use crate::models::{Biomarker, RiskTier, Trend};

/// Card data for one biomarker in the latest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerSummary {
    pub biomarker: Biomarker,
    pub label: String,
    pub value: f64,
    /// False when the value is the zero placeholder for "not reported".
    pub reported: bool,
    pub unit: String,
    pub tier: RiskTier,
    pub interpretation: String,
    pub trend: Trend,
    pub previous_value: Option<f64>,
    pub change_percent: Option<f64>,
}

/// Everything the dashboard shows for the most recent report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub date: NaiveDate,
    pub record_count: usize,
    pub summaries: Vec<BiomarkerSummary>,
    /// Reported biomarkers whose latest value is in the high-risk tier.
    pub alerts: Vec<Biomarker>,
}

/// Summarise the latest record against the one before it.
/// Returns `None` for an empty history.
pub fn build_snapshot(history: &MeasurementHistory) -> Option<DashboardSnapshot> {
    let latest = history.latest()?;
    let previous = history.previous();

    let summaries: Vec<BiomarkerSummary> = Biomarker::ALL
        .into_iter()
        .map(|biomarker| {
            let value = latest.value(biomarker);
            let previous_value = previous.map(|r| r.value(biomarker)).filter(|v| *v != 0.0);
            let classification = classify(biomarker, value);
            BiomarkerSummary {
                biomarker,
                label: biomarker.label().to_string(),
                value,
                reported: latest.is_reported(biomarker),
                unit: classification.unit,
                tier: classification.tier,
                interpretation: classification.interpretation,
                trend: compute_trend(value, previous_value),
                previous_value,
                change_percent: percent_change(value, previous_value),
            }
        })
        .collect();

    let alerts = summaries
        .iter()
        .filter(|s| s.reported && s.tier == RiskTier::High)
        .map(|s| s.biomarker)
        .collect();

    Some(DashboardSnapshot {
        date: latest.date,
        record_count: history.len(),
        summaries,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedValues, MeasurementRecord};

    fn record(date: &str, values: &[(Biomarker, f64)]) -> MeasurementRecord {
        let mut extracted = ExtractedValues::default();
        for (b, v) in values {
            extracted.set(*b, *v);
        }
        MeasurementRecord::from_values(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), &extracted)
    }

    fn summary(snapshot: &DashboardSnapshot, biomarker: Biomarker) -> &BiomarkerSummary {
        snapshot.summaries.iter().find(|s| s.biomarker == biomarker).unwrap()
    }

    #[test]
    fn empty_history_has_no_snapshot() {
        assert!(build_snapshot(&MeasurementHistory::new()).is_none());
    }

    #[test]
    fn single_record_is_stable_everywhere() {
        let history = MeasurementHistory::from_records([record(
            "2024-03-15",
            &[(Biomarker::TotalCholesterol, 195.0)],
        )]);
        let snapshot = build_snapshot(&history).unwrap();
        assert_eq!(snapshot.summaries.len(), 8);
        assert!(snapshot.summaries.iter().all(|s| s.trend == Trend::Stable));
        assert!(snapshot.summaries.iter().all(|s| s.change_percent.is_none()));
        assert_eq!(summary(&snapshot, Biomarker::TotalCholesterol).tier, RiskTier::Optimal);
    }

    #[test]
    fn trends_and_alerts_from_latest_two_records() {
        let history = MeasurementHistory::from_records([
            record(
                "2024-06-01",
                &[(Biomarker::HdlCholesterol, 35.0), (Biomarker::VitaminD, 18.0), (Biomarker::Hba1c, 5.6)],
            ),
            record(
                "2023-12-01",
                &[(Biomarker::HdlCholesterol, 42.0), (Biomarker::VitaminD, 25.0), (Biomarker::Hba1c, 5.5)],
            ),
        ]);
        let snapshot = build_snapshot(&history).unwrap();
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(snapshot.record_count, 2);

        let hdl = summary(&snapshot, Biomarker::HdlCholesterol);
        assert_eq!(hdl.tier, RiskTier::High);
        assert_eq!(hdl.trend, Trend::Down);
        assert_eq!(hdl.previous_value, Some(42.0));
        assert_eq!(hdl.change_percent, Some(-16.7));

        let hba1c = summary(&snapshot, Biomarker::Hba1c);
        assert_eq!(hba1c.trend, Trend::Stable);

        assert!(snapshot.alerts.contains(&Biomarker::HdlCholesterol));
        assert!(snapshot.alerts.contains(&Biomarker::VitaminD));
        assert!(!snapshot.alerts.contains(&Biomarker::Hba1c));
        // B12 was never reported; its zero placeholder must not raise an alert.
        assert!(!summary(&snapshot, Biomarker::VitaminB12).reported);
        assert!(!snapshot.alerts.contains(&Biomarker::VitaminB12));
    }

    #[test]
    fn unreported_previous_value_means_no_trend() {
        let history = MeasurementHistory::from_records([
            record("2023-01-01", &[(Biomarker::LdlCholesterol, 120.0)]),
            record("2024-01-01", &[(Biomarker::LdlCholesterol, 130.0), (Biomarker::Creatinine, 1.0)]),
        ]);
        let snapshot = build_snapshot(&history).unwrap();
        let creatinine = summary(&snapshot, Biomarker::Creatinine);
        assert_eq!(creatinine.previous_value, None);
        assert_eq!(creatinine.trend, Trend::Stable);
        assert_eq!(summary(&snapshot, Biomarker::LdlCholesterol).trend, Trend::Up);
    }
}

use serde::{Deserialize, Serialize};

use super::reference::{reference_table, ReferenceRange, ReferenceTable};
use crate::models::{Biomarker, MeasurementRecord, ModelError, RiskTier};

/// Tier and patient-facing sentence for one biomarker value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub biomarker: Biomarker,
    pub value: f64,
    pub unit: String,
    pub tier: RiskTier,
    pub interpretation: String,
}

/// Classify a value against the bundled reference table.
pub fn classify(biomarker: Biomarker, value: f64) -> Classification {
    classify_with(reference_table(), biomarker, value)
}

/// Classify a value identified by its dashboard key (e.g. `"ldlCholesterol"`).
pub fn classify_key(key: &str, value: f64) -> Result<Classification, ModelError> {
    let biomarker: Biomarker = key.parse()?;
    Ok(classify(biomarker, value))
}

/// Classify every reported field of a record, in dashboard order.
/// Zero-filled fields were never measured and are left out.
pub fn classify_record(record: &MeasurementRecord) -> Vec<Classification> {
    Biomarker::ALL
        .into_iter()
        .filter(|b| record.is_reported(*b))
        .map(|b| classify(b, record.value(b)))
        .collect()
}

pub fn classify_with(table: &ReferenceTable, biomarker: Biomarker, value: f64) -> Classification {
    let range = table.get(biomarker);
    let tier = risk_tier(range, value);
    Classification {
        biomarker,
        value,
        unit: range.unit.clone(),
        tier,
        interpretation: range.interpretation(tier).to_string(),
    }
}

/// Map a value to exactly one tier.
///
/// Declared bands win; values in a gap between bands, or beyond the outermost
/// band, take the tier of the nearest band. Equidistant values take the more
/// severe tier. NaN is treated like an unreported value (0).
pub fn risk_tier(range: &ReferenceRange, value: f64) -> RiskTier {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    };

    if range.is_high_risk(value) {
        return RiskTier::High;
    }
    if let Some((tier, _)) = range.bands().find(|(_, band)| band.contains(value)) {
        return tier;
    }

    let mut nearest = (RiskTier::Optimal, f64::INFINITY);
    for (tier, band) in range.bands() {
        let distance = band.distance(value);
        if distance <= nearest.1 {
            nearest = (tier, distance);
        }
    }
    nearest.0
}

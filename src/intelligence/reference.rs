use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Biomarker, ModelError, RiskDirection, RiskTier};

/// Reference ranges compiled into the binary.
const BUNDLED_REFERENCE_RANGES: &str = include_str!("../../resources/reference_ranges.json");

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to parse reference ranges: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No reference range for biomarker: {0}")]
    MissingBiomarker(Biomarker),

    #[error("Reference range declared twice for biomarker: {0}")]
    DuplicateBiomarker(Biomarker),

    #[error("Invalid bands for {biomarker}: {reason}")]
    InvalidBands { biomarker: Biomarker, reason: String },

    #[error("Missing {tier} interpretation for {biomarker}")]
    MissingInterpretation { biomarker: Biomarker, tier: RiskTier },
}

/// A half-open numeric band `[min, max)`. `max: None` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Band {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value < max)
    }

    /// Distance from `value` to the nearest point of the band (0 inside).
    pub fn distance(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else {
            match self.max {
                Some(max) if value >= max => value - max,
                _ => 0.0,
            }
        }
    }
}

/// Fixed patient-facing sentence per tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretations {
    pub optimal: String,
    #[serde(default)]
    pub borderline: Option<String>,
    pub high: String,
}

/// Clinical reference range for one biomarker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub biomarker: Biomarker,
    /// Display unit only; never compared.
    pub unit: String,
    pub direction: RiskDirection,
    pub optimal: Band,
    #[serde(default)]
    pub borderline: Option<Band>,
    pub high: Band,
    pub interpretation: Interpretations,
}

impl ReferenceRange {
    /// Whether `value` lies in the high-risk band. The band is open-ended
    /// away from the optimal side: upwards from `high.min` for
    /// lower-is-better biomarkers, downwards from `high.max` otherwise.
    pub fn is_high_risk(&self, value: f64) -> bool {
        match self.direction {
            RiskDirection::LowerIsBetter => value >= self.high.min,
            RiskDirection::HigherIsBetter => self.high.max.is_some_and(|max| value < max),
        }
    }

    /// Declared bands with their tier, in severity order.
    pub fn bands(&self) -> impl DoubleEndedIterator<Item = (RiskTier, Band)> + '_ {
        std::iter::once((RiskTier::Optimal, self.optimal))
            .chain(self.borderline.map(|b| (RiskTier::Borderline, b)))
            .chain(std::iter::once((RiskTier::High, self.high)))
    }

    pub fn interpretation(&self, tier: RiskTier) -> &str {
        match tier {
            RiskTier::Optimal => self.interpretation.optimal.as_str(),
            // Only reachable when a borderline band exists, which validation
            // pairs with a borderline sentence.
            RiskTier::Borderline => self
                .interpretation
                .borderline
                .as_deref()
                .unwrap_or(self.interpretation.optimal.as_str()),
            RiskTier::High => self.interpretation.high.as_str(),
        }
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        let invalid = |reason: String| ReferenceError::InvalidBands {
            biomarker: self.biomarker,
            reason,
        };

        for (tier, band) in self.bands() {
            if !band.min.is_finite() || band.max.is_some_and(|max| !max.is_finite()) {
                return Err(invalid(format!("{tier} band has a non-finite bound")));
            }
            if band.max.is_some_and(|max| max <= band.min) {
                return Err(invalid(format!("{tier} band is empty")));
            }
        }

        if self.borderline.is_some() && self.interpretation.borderline.is_none() {
            return Err(ReferenceError::MissingInterpretation {
                biomarker: self.biomarker,
                tier: RiskTier::Borderline,
            });
        }

        // Walk the bands from the safe end towards the risky end and check
        // each one starts where (or after) the previous one stopped.
        let ordered: Vec<Band> = match self.direction {
            RiskDirection::LowerIsBetter => self.bands().map(|(_, b)| b).collect(),
            RiskDirection::HigherIsBetter => {
                if self.high.max.is_none() {
                    return Err(invalid("high band needs an upper bound".into()));
                }
                self.bands().rev().map(|(_, b)| b).collect()
            }
        };
        for pair in ordered.windows(2) {
            let upper = pair[0]
                .max
                .ok_or_else(|| invalid("inner band is unbounded above".into()))?;
            if upper > pair[1].min {
                return Err(invalid(format!(
                    "bands overlap: {upper} is above next band start {}",
                    pair[1].min
                )));
            }
        }
        Ok(())
    }
}

/// Validated reference ranges for all eight biomarkers.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    ranges: Vec<ReferenceRange>,
}

impl ReferenceTable {
    /// Parse and validate a JSON array of reference ranges.
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let parsed: Vec<ReferenceRange> = serde_json::from_str(json)?;

        let mut slots: Vec<Option<ReferenceRange>> = vec![None; Biomarker::ALL.len()];
        for range in parsed {
            range.validate()?;
            let slot = &mut slots[range.biomarker.index()];
            if slot.is_some() {
                return Err(ReferenceError::DuplicateBiomarker(range.biomarker));
            }
            *slot = Some(range);
        }

        let ranges = Biomarker::ALL
            .into_iter()
            .zip(slots)
            .map(|(b, slot)| slot.ok_or(ReferenceError::MissingBiomarker(b)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ranges })
    }

    /// The table shipped with the crate.
    pub fn bundled() -> Result<Self, ReferenceError> {
        Self::from_json(BUNDLED_REFERENCE_RANGES)
    }

    pub fn get(&self, biomarker: Biomarker) -> &ReferenceRange {
        &self.ranges[biomarker.index()]
    }

    /// Look up by dashboard key (e.g. `"hdlCholesterol"`).
    pub fn get_by_key(&self, key: &str) -> Result<&ReferenceRange, ModelError> {
        Ok(self.get(key.parse()?))
    }
}

static REFERENCE_TABLE: LazyLock<ReferenceTable> = LazyLock::new(|| {
    ReferenceTable::bundled()
        .unwrap_or_else(|e| panic!("bundled reference ranges are invalid: {e}"))
});

/// Process-wide reference table, loaded on first use.
pub fn reference_table() -> &'static ReferenceTable {
    &REFERENCE_TABLE
}

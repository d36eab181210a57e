use serde::{Deserialize, Serialize};

use super::ModelError;

/// The eight tracked biomarkers, in dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biomarker {
    #[serde(rename = "totalCholesterol")]
    TotalCholesterol,
    #[serde(rename = "hdlCholesterol")]
    HdlCholesterol,
    #[serde(rename = "ldlCholesterol")]
    LdlCholesterol,
    #[serde(rename = "triglycerides")]
    Triglycerides,
    #[serde(rename = "creatinine")]
    Creatinine,
    #[serde(rename = "vitaminD")]
    VitaminD,
    #[serde(rename = "vitaminB12")]
    VitaminB12,
    #[serde(rename = "hba1c")]
    Hba1c,
}

impl Biomarker {
    pub const ALL: [Biomarker; 8] = [
        Biomarker::TotalCholesterol,
        Biomarker::HdlCholesterol,
        Biomarker::LdlCholesterol,
        Biomarker::Triglycerides,
        Biomarker::Creatinine,
        Biomarker::VitaminD,
        Biomarker::VitaminB12,
        Biomarker::Hba1c,
    ];

    /// Stable key used by the dashboard and the reference table.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "totalCholesterol",
            Self::HdlCholesterol => "hdlCholesterol",
            Self::LdlCholesterol => "ldlCholesterol",
            Self::Triglycerides => "triglycerides",
            Self::Creatinine => "creatinine",
            Self::VitaminD => "vitaminD",
            Self::VitaminB12 => "vitaminB12",
            Self::Hba1c => "hba1c",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "Total Cholesterol",
            Self::HdlCholesterol => "HDL Cholesterol",
            Self::LdlCholesterol => "LDL Cholesterol",
            Self::Triglycerides => "Triglycerides",
            Self::Creatinine => "Creatinine",
            Self::VitaminD => "Vitamin D",
            Self::VitaminB12 => "Vitamin B12",
            Self::Hba1c => "HbA1c",
        }
    }

    /// Position in `ALL`, used to index fixed-size per-biomarker arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::str::FromStr for Biomarker {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.key() == s)
            .ok_or_else(|| ModelError::UnknownBiomarker(s.to_string()))
    }
}

impl std::fmt::Display for Biomarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

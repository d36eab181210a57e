//! Compiled label patterns for biomarker values and report dates.
//!
//! Every list is ordered most specific first. The extractor stops at the
//! first rule that yields a usable value, so a generic label ("cholesterol")
//! must come after the phrasings it would otherwise shadow.
//!
//! A biomarker value only counts when its unit follows it. Numbers inside a
//! label ("25-Hydroxy") or on a medication line ("Vitamin D3 2000 IU") carry
//! no lab unit and are never read as measurements.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Biomarker;

const MG_DL: &str = r"mg\s*/\s*dl\b";
const NG_ML: &str = r"ng\s*/\s*ml\b";
const PG_ML: &str = r"pg\s*/\s*ml\b";
const PERCENT: &str = "%";

/// One label pattern anchored on its unit.
///
/// The label may be followed by a parenthetical such as "(25-OH)" or
/// "(Glycosylated Hemoglobin)" before the ':' or whitespace separator.
pub struct PatternRule {
    regex: Regex,
    /// Words marking the label as a different analyte, either just before it
    /// on the same line ("HDL Cholesterol") or inside its parenthetical
    /// ("Cholesterol (HDL)").
    excluded_qualifiers: &'static [&'static str],
}

impl PatternRule {
    fn new(label: &str, unit: &str, excluded_qualifiers: &'static [&'static str]) -> Self {
        let pattern = format!(
            r"(?i){label}\s*(?:\((?P<note>[^)\n]*)\))?[:\s]+(?P<value>\d+\.?\d*)\s*{unit}"
        );
        Self {
            regex: Regex::new(&pattern).expect("biomarker pattern must compile"),
            excluded_qualifiers,
        }
    }

    /// Raw numeric text of the first eligible match, if any.
    pub fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures_iter(text)
            .find(|caps| {
                let start = caps.get(0).map_or(0, |m| m.start());
                let note = caps.name("note").map_or("", |m| m.as_str());
                !self.preceded_by_qualifier(text, start) && !self.note_has_qualifier(note)
            })
            .and_then(|caps| caps.name("value"))
            .map(|m| m.as_str())
    }

    fn preceded_by_qualifier(&self, text: &str, match_start: usize) -> bool {
        if self.excluded_qualifiers.is_empty() {
            return false;
        }
        let line_start = text[..match_start].rfind('\n').map_or(0, |i| i + 1);
        let prefix = text[line_start..match_start]
            .trim_end_matches(|c: char| c.is_whitespace() || c == '-' || c == '/')
            .to_lowercase();
        self.excluded_qualifiers.iter().any(|q| prefix.ends_with(q))
    }

    fn note_has_qualifier(&self, note: &str) -> bool {
        note.split(|c: char| !c.is_alphanumeric())
            .any(|word| {
                self.excluded_qualifiers
                    .iter()
                    .any(|q| word.eq_ignore_ascii_case(q))
            })
    }
}

/// Ordered rules for one biomarker.
pub struct BiomarkerPatterns {
    pub biomarker: Biomarker,
    pub rules: Vec<PatternRule>,
}

/// Rules for all eight biomarkers, in `Biomarker::ALL` order.
pub static BIOMARKER_PATTERNS: LazyLock<Vec<BiomarkerPatterns>> = LazyLock::new(|| {
    let lipid_qualifiers: &'static [&'static str] = &["hdl", "ldl", "vldl", "lipoprotein", "non"];
    let urine_qualifiers: &'static [&'static str] = &["urine", "urinary"];
    vec![
        BiomarkerPatterns {
            biomarker: Biomarker::TotalCholesterol,
            rules: vec![
                PatternRule::new(r"\btotal\s+cholesterol", MG_DL, &[]),
                PatternRule::new(r"\bcholesterol[,\s]+total", MG_DL, &[]),
                PatternRule::new(r"\bcholesterol", MG_DL, lipid_qualifiers),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::HdlCholesterol,
            rules: vec![
                PatternRule::new(r"\bhdl[\s-]+cholesterol", MG_DL, &["non"]),
                PatternRule::new(r"\bhdl(?:-c)?", MG_DL, &["non"]),
                PatternRule::new(r"\bhigh[\s-]+density\s+lipoprotein(?:\s+cholesterol)?", MG_DL, &[]),
                PatternRule::new(r"\bcholesterol\s*\(\s*hdl(?:-c)?\s*\)", MG_DL, &[]),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::LdlCholesterol,
            rules: vec![
                PatternRule::new(r"\bldl[\s-]+cholesterol", MG_DL, &[]),
                PatternRule::new(r"\bldl(?:-c)?", MG_DL, &[]),
                PatternRule::new(r"\blow[\s-]+density\s+lipoprotein(?:\s+cholesterol)?", MG_DL, &["very"]),
                PatternRule::new(r"\bcholesterol\s*\(\s*ldl(?:-c)?\s*\)", MG_DL, &[]),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::Triglycerides,
            rules: vec![
                PatternRule::new(r"\btriglycerides", MG_DL, &[]),
                PatternRule::new(r"\btrigs?", MG_DL, &[]),
                PatternRule::new(r"\btriglyceride", MG_DL, &[]),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::Creatinine,
            rules: vec![
                PatternRule::new(r"\bserum\s+creatinine", MG_DL, &[]),
                PatternRule::new(r"\bcreatinine", MG_DL, urine_qualifiers),
                PatternRule::new(r"\bs\.\s*creatinine", MG_DL, urine_qualifiers),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::VitaminD,
            rules: vec![
                PatternRule::new(r"\b25[\s-]*(?:\(oh\)|oh|hydroxy)[\s-]*vitamin\s+d[23]?\b", NG_ML, &[]),
                PatternRule::new(r"\bvitamin\s+d[23]?[,\s]+25[\s-]*(?:\(oh\)|oh|hydroxy)\b", NG_ML, &[]),
                PatternRule::new(r"\bvitamin\s+d[23]?\b", NG_ML, &[]),
                PatternRule::new(r"\bvit\.?\s*d[23]?\b", NG_ML, &[]),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::VitaminB12,
            rules: vec![
                PatternRule::new(r"\bvitamin\s+b[\s-]?12\b", PG_ML, &[]),
                PatternRule::new(r"\bcobalamin", PG_ML, &[]),
                PatternRule::new(r"\bb-?12\b", PG_ML, &[]),
            ],
        },
        BiomarkerPatterns {
            biomarker: Biomarker::Hba1c,
            rules: vec![
                PatternRule::new(r"\bhb\s*a1c", PERCENT, &[]),
                PatternRule::new(r"\bha?emoglobin\s+a1c", PERCENT, &[]),
                PatternRule::new(r"\bglyc(?:osyl)?ated\s+ha?emoglobin", PERCENT, &[]),
                PatternRule::new(r"\ba1c", PERCENT, &[]),
            ],
        },
    ]
});

/// How a captured date string is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `M/D/YYYY` or `M-D-YYYY`
    MonthDayYear,
    /// `YYYY-M-D`
    Iso,
}

pub struct DatePattern {
    pub regex: Regex,
    pub layout: DateLayout,
}

impl DatePattern {
    fn new(pattern: &str, layout: DateLayout) -> Self {
        Self {
            regex: Regex::new(pattern).expect("date pattern must compile"),
            layout,
        }
    }
}

/// Date patterns in priority order: labelled forms, then any slash date,
/// then any ISO date.
pub static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    use DateLayout::*;
    vec![
        DatePattern::new(r"(?i)\bdate[:\s]+(\d{1,2}/\d{1,2}/\d{4})", MonthDayYear),
        DatePattern::new(r"(?i)\bdate[:\s]+(\d{1,2}-\d{1,2}-\d{4})", MonthDayYear),
        DatePattern::new(r"(?i)\bdate[:\s]+(\d{4}-\d{1,2}-\d{1,2})", Iso),
        DatePattern::new(r"(?i)\breport\s+date[:\s]+(\d{1,2}/\d{1,2}/\d{4})", MonthDayYear),
        DatePattern::new(r"(?i)\bcollected[:\s]+(\d{1,2}/\d{1,2}/\d{4})", MonthDayYear),
        DatePattern::new(r"(?i)\bcollected[:\s]+(\d{4}-\d{1,2}-\d{1,2})", Iso),
        DatePattern::new(r"\b(\d{1,2}/\d{1,2}/\d{4})\b", MonthDayYear),
        DatePattern::new(r"\b(\d{4}-\d{1,2}-\d{1,2})\b", Iso),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_for(biomarker: Biomarker) -> &'static [PatternRule] {
        &BIOMARKER_PATTERNS
            .iter()
            .find(|p| p.biomarker == biomarker)
            .unwrap()
            .rules
    }

    #[test]
    fn patterns_follow_biomarker_order() {
        let order: Vec<Biomarker> = BIOMARKER_PATTERNS.iter().map(|p| p.biomarker).collect();
        assert_eq!(order, Biomarker::ALL.to_vec());
        assert!(BIOMARKER_PATTERNS.iter().all(|p| !p.rules.is_empty()));
    }

    #[test]
    fn date_patterns_compile() {
        assert_eq!(DATE_PATTERNS.len(), 8);
    }

    #[test]
    fn generic_cholesterol_skips_qualified_lines() {
        let generic = &rules_for(Biomarker::TotalCholesterol)[2];
        let text = "HDL Cholesterol: 45 mg/dL\nLDL-Cholesterol 120 mg/dL\nCholesterol: 200 mg/dL";
        assert_eq!(generic.first_capture(text), Some("200"));
    }

    #[test]
    fn generic_cholesterol_skips_vldl_and_non_hdl() {
        let generic = &rules_for(Biomarker::TotalCholesterol)[2];
        let text = "VLDL Cholesterol: 37 mg/dL\nNon-HDL Cholesterol: 150 mg/dL";
        assert_eq!(generic.first_capture(text), None);
    }

    #[test]
    fn qualifier_inside_parenthetical_is_excluded() {
        let generic = &rules_for(Biomarker::TotalCholesterol)[2];
        assert_eq!(generic.first_capture("Cholesterol (HDL): 45 mg/dL"), None);
        assert_eq!(generic.first_capture("Cholesterol (Non-HDL): 150 mg/dL"), None);
        assert_eq!(
            generic.first_capture("Cholesterol (LDL): 120 mg/dL\nCholesterol (fasting): 190 mg/dL"),
            Some("190")
        );

        let creatinine = &rules_for(Biomarker::Creatinine)[1];
        assert_eq!(creatinine.first_capture("Creatinine (Urine): 110 mg/dL"), None);
        assert_eq!(creatinine.first_capture("Creatinine (Serum): 0.9 mg/dL"), Some("0.9"));
    }

    #[test]
    fn bare_ldl_does_not_match_inside_vldl() {
        let bare = &rules_for(Biomarker::LdlCholesterol)[1];
        assert_eq!(bare.first_capture("VLDL: 37 mg/dL"), None);
        assert_eq!(bare.first_capture("VLDL: 37 mg/dL\nLDL: 125 mg/dL"), Some("125"));
    }

    #[test]
    fn parenthetical_qualifier_is_tolerated() {
        let hba1c = &rules_for(Biomarker::Hba1c)[0];
        assert_eq!(
            hba1c.first_capture("HbA1c (Glycosylated Hemoglobin): 5.8 %"),
            Some("5.8")
        );
        let vit_d = &rules_for(Biomarker::VitaminD)[2];
        assert_eq!(vit_d.first_capture("Vitamin D (25-OH): 22 ng/mL"), Some("22"));
    }

    #[test]
    fn value_requires_its_unit() {
        let vit_d = &rules_for(Biomarker::VitaminD)[2];
        assert_eq!(vit_d.first_capture("Vitamin D: 28"), None);
        assert_eq!(vit_d.first_capture("Vitamin D: 28 pg/mL"), None);
        assert_eq!(vit_d.first_capture("Vitamin D: 28ng/mL"), Some("28"));
        assert_eq!(vit_d.first_capture("Vitamin D3 2000 IU daily"), None);

        let hdl = &rules_for(Biomarker::HdlCholesterol)[1];
        assert_eq!(hdl.first_capture("HDL: 52 mg / dL"), Some("52"));
        assert_eq!(hdl.first_capture("HDL: 52 mg/dLx"), None);
    }

    #[test]
    fn digits_in_a_label_are_not_values() {
        let vit_d = &rules_for(Biomarker::VitaminD)[2];
        assert_eq!(vit_d.first_capture("Vitamin D 25-Hydroxy: 28 ng/mL"), None);
        let reversed = &rules_for(Biomarker::VitaminD)[1];
        assert_eq!(reversed.first_capture("Vitamin D 25-Hydroxy: 28 ng/mL"), Some("28"));
    }

    #[test]
    fn urine_creatinine_is_not_serum_creatinine() {
        let generic = &rules_for(Biomarker::Creatinine)[1];
        assert_eq!(generic.first_capture("Urine Creatinine: 110 mg/dL"), None);
        assert_eq!(generic.first_capture("Creatinine 1.1 mg/dL"), Some("1.1"));
    }
}

//! Post-OCR correction of misread biomarker label words.
//!
//! OCR output regularly turns "Creatinine" into "Creatiniue" or "Cholesterol"
//! into "Cholestero1", which no label pattern matches.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Lowercase label vocabulary. "creatine" is listed so that creatine (kinase)
/// is never rewritten to creatinine.
const LABEL_TERMS: &[&str] = &[
    "cholesterol", "cobalamin", "collected", "creatine", "creatinine",
    "density", "glycated", "glycosylated", "haemoglobin", "hemoglobin",
    "hydroxy", "lipoprotein", "triglyceride", "triglycerides", "vitamin",
];

const MAX_EDIT_DISTANCE: usize = 2;

/// Candidate words: a letter followed by at least four letters or digits.
/// Digits stay inside the word so "Cholestero1" is scored whole.
static CANDIDATE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{L}[\p{L}\p{N}]{4,}\b").expect("candidate word pattern must compile")
});

/// Replace misread label words in `text`, leaving everything else untouched.
pub fn correct_label_terms(text: &str) -> String {
    CANDIDATE_WORD
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            match closest_label(word) {
                Some(label) => {
                    tracing::debug!(from = word, to = label, "Corrected OCR label word");
                    CaseShape::of(word).apply(label)
                }
                None => word.to_string(),
            }
        })
        .into_owned()
}

/// The one label strictly closest to `word` within the edit budget.
/// `None` when the word already is a label, nothing is close, or two labels tie.
fn closest_label(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    let mut scored: Vec<(usize, &'static str)> = LABEL_TERMS
        .iter()
        .map(|&term| (strsim::levenshtein(&lower, term), term))
        .filter(|(distance, _)| *distance <= MAX_EDIT_DISTANCE)
        .collect();
    scored.sort_unstable();

    match scored.as_slice() {
        [(0, _), ..] => None,
        [(_, label)] => Some(*label),
        [(best, label), (runner_up, _), ..] if best < runner_up => Some(*label),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CaseShape {
    Upper,
    Title,
    Lower,
}

impl CaseShape {
    fn of(word: &str) -> Self {
        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
        match letters.as_slice() {
            [first, rest @ ..]
                if first.is_uppercase() && !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) =>
            {
                Self::Upper
            }
            [first, ..] if first.is_uppercase() => Self::Title,
            _ => Self::Lower,
        }
    }

    fn apply(self, label: &str) -> String {
        match self {
            Self::Upper => label.to_uppercase(),
            Self::Lower => label.to_string(),
            Self::Title => {
                let mut chars = label.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

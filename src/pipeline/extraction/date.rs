use chrono::NaiveDate;

use super::patterns::{DateLayout, DATE_PATTERNS};
use super::ExtractionError;

/// Find the report's observation date.
///
/// Tries each date pattern in priority order; the first one whose match is a
/// real calendar date wins. A match that does not parse (e.g. "13/45/2024")
/// is logged and skipped. Returns `None` when no pattern yields a date.
pub fn extract_report_date(text: &str) -> Option<NaiveDate> {
    for pattern in DATE_PATTERNS.iter() {
        let Some(raw) = pattern
            .regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        match parse_date(raw, pattern.layout) {
            Ok(date) => return Some(date),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unparseable report date");
            }
        }
    }
    None
}

/// Parse a captured date string according to its layout.
pub fn parse_date(raw: &str, layout: DateLayout) -> Result<NaiveDate, ExtractionError> {
    let unparseable = || ExtractionError::UnparseableDate(raw.to_string());

    let parts: Vec<&str> = raw.split(['/', '-']).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(unparseable());
    };
    let (year, month, day) = match layout {
        DateLayout::MonthDayYear => (c, a, b),
        DateLayout::Iso => (a, b, c),
    };

    let year: i32 = year.parse().map_err(|_| unparseable())?;
    let month: u32 = month.parse().map_err(|_| unparseable())?;
    let day: u32 = day.parse().map_err(|_| unparseable())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(unparseable)
}

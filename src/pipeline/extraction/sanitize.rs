/// Normalise report text before pattern matching.
///
/// Drops control characters (keeping line breaks and tabs), maps non-breaking
/// and other Unicode spaces to a plain space, trims every line and removes
/// blank lines. Labels and values are never altered.
pub fn normalize_report_text(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\n' | '\t' => Some(c),
            '\r' => None,
            c if c.is_control() => None,
            c if c.is_whitespace() => Some(' '),
            c => Some(c),
        })
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_and_control_bytes() {
        let clean = normalize_report_text("HDL\x00 Cholesterol:\x07 42 mg/dL");
        assert_eq!(clean, "HDL Cholesterol: 42 mg/dL");
    }

    #[test]
    fn normalises_crlf_and_blank_lines() {
        let clean = normalize_report_text("Date: 03/15/2024\r\n\r\n   LDL: 125  \r\n");
        assert_eq!(clean, "Date: 03/15/2024\nLDL: 125");
    }

    #[test]
    fn maps_unicode_spaces() {
        let clean = normalize_report_text("Vitamin\u{00A0}D:\u{2009}28 ng/mL");
        assert_eq!(clean, "Vitamin D: 28 ng/mL");
    }

    #[test]
    fn keeps_units_and_symbols() {
        let text = "HbA1c: 5.8 %\nB12: 320 pg/mL (µ)";
        assert_eq!(normalize_report_text(text), text);
    }
}

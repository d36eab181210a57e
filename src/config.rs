/// Application-level constants
pub const APP_NAME: &str = "Labtrend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Relative change (against the current value) below which a biomarker is
/// reported as stable between two consecutive records.
pub const TREND_STABLE_THRESHOLD: f64 = 0.05;

/// Largest report text file the plain-text source will read (10 MiB).
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "labtrend_lib=debug,labtrend=debug,warn"
    } else {
        "labtrend_lib=info,labtrend=info,warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_labtrend() {
        assert_eq!(APP_NAME, "Labtrend");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().contains("labtrend_lib="));
    }

    #[test]
    fn stable_threshold_is_five_percent() {
        assert!((TREND_STABLE_THRESHOLD - 0.05).abs() < f64::EPSILON);
    }
}

use crate::config::TREND_STABLE_THRESHOLD;
use crate::models::Trend;

/// Direction of change between two consecutive values of one biomarker.
///
/// A missing or zero previous value is "no previous value" and yields
/// `Stable`. The stability threshold is relative to the *current* value.
pub fn compute_trend(current: f64, previous: Option<f64>) -> Trend {
    let previous = match previous {
        Some(p) if p != 0.0 => p,
        _ => return Trend::Stable,
    };

    let diff = (current - previous).abs();
    if diff < current * TREND_STABLE_THRESHOLD {
        Trend::Stable
    } else if current > previous {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Signed percent change from `previous`, rounded to one decimal.
/// `None` without a non-zero previous value.
pub fn percent_change(current: f64, previous: Option<f64>) -> Option<f64> {
    let previous = previous.filter(|p| *p != 0.0)?;
    let change = (current - previous) / previous * 100.0;
    Some((change * 10.0).round() / 10.0)
}

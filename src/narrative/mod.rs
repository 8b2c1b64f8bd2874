pub mod portfolio;
pub mod repository;

/// Whole-number percentage, `"0%"` when there is nothing to divide by.
pub fn pct(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    format!("{}%", ((part as f64 / whole as f64) * 100.0).round() as i64)
}

/// Half-up rounding, so `-0.5` becomes `0` rather than `-1`.
pub(crate) fn round_days(days: f64) -> i64 {
    (days + 0.5).floor() as i64
}

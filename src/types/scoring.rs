pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 10.0;

/// Clamps a raw rule-table sum into `[0, 10]` and keeps one decimal.
pub fn finalize(raw: Score) -> Score {
    (raw.clamp(MIN_SCORE, MAX_SCORE) * 10.0).round() / 10.0
}

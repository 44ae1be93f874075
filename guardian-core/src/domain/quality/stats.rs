// guardian-core/src/domain/quality/stats.rs
//
// Small statistical helpers shared by the check engines. Population
// variance on purpose: the series IS the population of observations,
// not a sample of a larger one.

/// Arithmetic mean. Returns `None` on an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divide by N, not N-1).
/// Returns `None` on an empty slice.
pub fn pstdev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Rounds to 2 decimals for detail strings (e.g. mean shown as 1817.5).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

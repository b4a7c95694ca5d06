/// Arithmetic mean; zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `min(value * multiplier, cap)`.
pub fn capped_linear(value: f64, multiplier: f64, cap: f64) -> f64 {
    (value * multiplier).min(cap)
}

/// Round to the nearest integer and clamp into `[0, max]`.
pub fn round_to_score(value: f64, max: u32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value.round() as u32).min(max)
}

/// The first and last `window` entries of a series. The two slices overlap
/// when the series is shorter than twice the window.
pub fn head_and_tail(values: &[f64], window: usize) -> (&[f64], &[f64]) {
    let take = window.min(values.len());
    (&values[..take], &values[values.len() - take..])
}

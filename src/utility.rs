/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rounds to `places` decimal places. Exact halves go to the even neighbour,
/// so 0.125 becomes 0.12 and 2.5 becomes 2.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}

/// Clamps into the unit interval.
pub fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

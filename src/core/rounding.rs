/// Rounds a snapshot amount to the nearest whole currency unit.
///
/// Ties round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`), which is
/// not what `f64::round` does for negative halves. Non-finite values are
/// returned unchanged.
pub fn round_currency(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

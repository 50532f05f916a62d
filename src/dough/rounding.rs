//! Decimal rounding for reported values

/// Round to a fixed number of decimal places.
///
/// Ties go to the even neighbour, so `round_to(0.125, 2)` is `0.12`.
/// Values too large to scale by `10^places` carry no fractional digits and
/// come back unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

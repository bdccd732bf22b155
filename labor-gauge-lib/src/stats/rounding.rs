/// Rounds half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    let rounded = (value * scale).round() / scale;

    // normalize negative zero so that rendering is stable
    if rounded == 0.0 { 0.0 } else { rounded }
}

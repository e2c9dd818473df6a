//! Small numeric helpers.

/// Round half toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
///
/// Mesh placement and line endpoints rely on this rule, so every rounding
/// that ends up in a cell coordinate goes through here.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Clamp without panicking when `max < min` (oversized shapes); `min` wins.
#[inline]
pub fn clamp_lenient(v: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    v.max(min).min(max)
}

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

//! Angle normalization and arc distances.
//!
//! Two canonical ranges are used throughout the workspace:
//! - `[0, 360)` for longitudes and counter-clockwise distances
//! - `(-180, 180]` for signed shortest-path separations
//!
//! The `+180` end of the signed range is fixed, so `closest_distance(0, 180)`
//! and `closest_distance(180, 0)` both return `+180`.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360.0 rounds up to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn z_normalize(deg: f64) -> f64 {
    let r = normalize(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Counter-clockwise distance from `from` to `to`, in [0, 360).
pub fn distance(from: f64, to: f64) -> f64 {
    normalize(to - from)
}

/// Signed shortest-path distance from `from` to `to`, in (-180, 180].
///
/// Positive when `to` lies ahead of `from` in zodiacal order.
pub fn closest_distance(from: f64, to: f64) -> f64 {
    z_normalize(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn normalize_basic_values() {
        assert!((normalize(0.0) - 0.0).abs() < EPS);
        assert!((normalize(360.0) - 0.0).abs() < EPS);
        assert!((normalize(361.0) - 1.0).abs() < EPS);
        assert!((normalize(-1.0) - 359.0).abs() < EPS);
        assert!((normalize(-720.0) - 0.0).abs() < EPS);
    }

    #[test]
    fn normalize_is_idempotent_and_bounded() {
        let mut a = -1000.0;
        while a < 1000.0 {
            let n = normalize(a);
            assert!((0.0..360.0).contains(&n), "normalize({a}) = {n}");
            assert!((normalize(n) - n).abs() < EPS);
            a += 7.3;
        }
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let n = normalize(-1e-17);
        assert!(n < 360.0);
    }

    #[test]
    fn z_normalize_values() {
        assert!((z_normalize(0.0) - 0.0).abs() < EPS);
        assert!((z_normalize(90.0) - 90.0).abs() < EPS);
        assert!((z_normalize(180.0) - 180.0).abs() < EPS);
        assert!((z_normalize(-180.0) - 180.0).abs() < EPS);
        assert!((z_normalize(181.0) + 179.0).abs() < EPS);
        assert!((z_normalize(270.0) + 90.0).abs() < EPS);
    }

    #[test]
    fn distances_are_counter_clockwise() {
        assert!((distance(0.0, 0.0) - 0.0).abs() < EPS);
        assert!((distance(0.0, 90.0) - 90.0).abs() < EPS);
        assert!((distance(0.0, 180.0) - 180.0).abs() < EPS);
        assert!((distance(0.0, -90.0) - 270.0).abs() < EPS);
        assert!((distance(0.0, -180.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn closest_distances_are_signed() {
        assert!((closest_distance(0.0, 0.0) - 0.0).abs() < EPS);
        assert!((closest_distance(0.0, 90.0) - 90.0).abs() < EPS);
        assert!((closest_distance(0.0, 180.0) - 180.0).abs() < EPS);
        assert!((closest_distance(0.0, 270.0) + 90.0).abs() < EPS);
        assert!((closest_distance(0.0, 359.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn closest_distance_antisymmetric_off_boundary() {
        let pairs = [(10.0, 50.0), (350.0, 20.0), (123.4, 301.2), (0.5, 179.0)];
        for (a, b) in pairs {
            assert!((closest_distance(a, b) + closest_distance(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn closest_distance_boundary_is_plus_180() {
        assert!((closest_distance(180.0, 0.0) - 180.0).abs() < EPS);
        assert!((closest_distance(0.0, 180.0) - 180.0).abs() < EPS);
    }
}

use std::f64::consts::PI;

/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

/// normalize arbitrary angles, given in degrees, to [0, 360):
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle % 360.0;
    // Tiny negative angles round to exactly 360 when shifted
    if angle < 0. {
        let angle = angle + 360.0;
        return if angle >= 360.0 { 0.0 } else { angle };
    }
    angle
}

/// The smallest absolute difference between two directions, given in degrees.
/// The result is in [0, 180], so 359° and 1° are 2° apart.
pub fn bearing_difference(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    if d > 180. {
        return 360. - d;
    }
    d
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn normalization() {
        assert_float_eq!(normalize_symmetric(1.5 * PI), -PI / 2., abs <= 1e-15);
        assert_float_eq!(normalize_symmetric(-1.5 * PI), PI / 2., abs <= 1e-15);

        assert_eq!(normalize_degrees(0.), 0.);
        assert_eq!(normalize_degrees(360.), 0.);
        assert_eq!(normalize_degrees(-90.), 270.);
        assert_eq!(normalize_degrees(725.), 5.);
        let tiny = normalize_degrees(-1e-300);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn differences() {
        assert_eq!(bearing_difference(10., 30.), 20.);
        assert_eq!(bearing_difference(30., 10.), 20.);
        assert_eq!(bearing_difference(359., 1.), 2.);
        assert_eq!(bearing_difference(1., 359.), 2.);
        assert_eq!(bearing_difference(0., 180.), 180.);
        assert_eq!(bearing_difference(-170., 170.), 20.);
    }
}

//! GCJ02 ↔ BD09
use std::f64::consts::PI;

const X_PI: f64 = PI * 3000.0 / 180.0;

/// GCJ02 → BD09
#[must_use]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    (z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// BD09 → GCJ02. The inverse of [`gcj02_to_bd09`], with no iteration:
/// a round trip is off by a few times 1e-7 degrees (a few centimeters).
#[must_use]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

// ----- Tests ---------------------------------------------------------------------

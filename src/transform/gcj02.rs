//! WGS84 ↔ GCJ02
use std::f64::consts::PI;

// The Krasovsky ellipsoid, with the eccentricity given as the literal
// constant of the published algorithm (cf. `Ellipsoid::named("krass")`)
const A: f64 = 6_378_245.0;
const EE: f64 = 0.006_693_421_622_965_943_23;

/// Is the point (degrees) outside the bounding box of mainland China?
/// Outside, GCJ02 is identical to WGS84.
#[must_use]
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    lng < 72.004 || lng > 137.8347 || lat < 0.8293 || lat > 55.8271
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// The obfuscation offsets (degrees of longitude, latitude) at the given point.
/// The polynomial series are evaluated relative to (105°E, 35°N), and scaled
/// by the curvature of the Krasovsky ellipsoid at the point's latitude.
fn delta(lng: f64, lat: f64) -> (f64, f64) {
    let d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let d_lng = transform_lng(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    // Meridian and prime vertical radii of curvature
    let d_lat = d_lat * 180.0 / (A * (1.0 - EE) / (magic * sqrt_magic) * PI);
    let d_lng = d_lng * 180.0 / (A / sqrt_magic * rad_lat.cos() * PI);
    (d_lng, d_lat)
}

/// WGS84 → GCJ02
#[must_use]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (d_lng, d_lat) = delta(lng, lat);
    (lng + d_lng, lat + d_lat)
}

/// GCJ02 → WGS84.
///
/// Not an exact inverse of [`wgs84_to_gcj02`]: the offsets are evaluated at the
/// GCJ02 point, as if it were the WGS84 point, and then subtracted.
#[must_use]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (d_lng, d_lat) = delta(lng, lat);
    let mg_lng = lng + d_lng;
    let mg_lat = lat + d_lat;
    (lng * 2.0 - mg_lng, lat * 2.0 - mg_lat)
}

// ----- Tests ---------------------------------------------------------------------

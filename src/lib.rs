//! *Latitude/longitude arithmetic for tracks and map data*.
//!
//! The crate covers two independent problems:
//!
//! - **Coordinate system conversion** between WGS84, GCJ02 (the Chinese
//!   "Mars" coordinates) and BD09 (Baidu's coordinates). See
//!   [`CoordinateSystem`] and the [`transform`] module.
//! - **Geodesics** on the ellipsoid, by Vincenty's
//!   [direct and inverse solutions](Bibliography::Vin75), and the track
//!   utilities built on top of them: total distance, resampling at fixed
//!   spacing, simplification and snapping onto a reference route. See
//!   [`Ellipsoid`] and the [`trajectory`] module.
//!
//! All angles are in degrees at the API boundary. All distances are in meters.
//!
//! ```rust
//! use latlng::prelude::*;
//! # fn main() -> Result<(), Error> {
//! let p0 = GeoPoint::new(0., 0.);
//! let p1 = GeoPoint::new(0., 1.);
//! let d = latlng::distance(&p0, &p1)?;
//! assert!((d - 111_319.490_793).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

mod bibliography;
mod coordinate;
mod ellipsoid;
pub mod math;
pub mod trajectory;
pub mod transform;

pub use bibliography::Bibliography;
pub use coordinate::DistanceBearing;
pub use coordinate::GeoPoint;
pub use coordinate::Polyline;
pub use ellipsoid::Ellipsoid;
pub use ellipsoid::CONVERGENCE_THRESHOLD;
pub use ellipsoid::MAX_ITERATIONS;
pub use transform::CoordinateSystem;

use thiserror::Error;

/// Preamble for users of the crate: `use latlng::prelude::*;`
pub mod prelude {
    pub use crate::CoordinateSystem;
    pub use crate::DistanceBearing;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeoPoint;
    pub use crate::Polyline;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::math::angular;
    pub use crate::DistanceBearing;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeoPoint;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vincenty iteration did not converge after {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("domain error: {0}")]
    Domain(&'static str),

    #[error("too few points (expected at least {required}, found {found})")]
    TooFewPoints { required: usize, found: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("{0} not found")]
    NotFound(String),
}

// ----- Shortcuts on the default ellipsoid ------------------------------------

/// Distance and bearings between two points on the WGS84 ellipsoid.
/// See [`Ellipsoid::geodesic_inv`].
pub fn distance_and_bearing(from: &GeoPoint, to: &GeoPoint) -> Result<DistanceBearing, Error> {
    Ellipsoid::default().geodesic_inv(from, to)
}

/// Geodesic distance in meters between two points on the WGS84 ellipsoid.
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> Result<f64, Error> {
    Ellipsoid::default().distance(from, to)
}

/// The bearing, in degrees, of the geodesic from `from` towards `to`, as
/// seen on arrival at `to`.
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> Result<f64, Error> {
    Ellipsoid::default().bearing(from, to)
}

/// The point reached by travelling `distance` meters from `origin`,
/// heading `bearing` degrees clockwise from north, on the WGS84 ellipsoid.
pub fn destination(origin: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint, Error> {
    Ellipsoid::default().destination(origin, distance, bearing)
}

/// The point at `fraction` (0..=1) of the way along the geodesic from
/// `from` to `to`.
pub fn point_at_fraction(from: &GeoPoint, to: &GeoPoint, fraction: f64) -> Result<GeoPoint, Error> {
    Ellipsoid::default().point_at_fraction(from, to, fraction)
}

/// Is `point` within `radius` meters of `center`, given a safety margin of
/// `offset` meters?
pub fn is_point_in_circle(
    point: &GeoPoint,
    center: &GeoPoint,
    radius: f64,
    offset: f64,
) -> Result<bool, Error> {
    Ok(distance(point, center)? + offset <= radius)
}

/// A random point within `radius` meters of `center`: a uniformly drawn
/// bearing, and a distance drawn uniformly from [0, radius).
///
/// The randomness is supplied by the caller, so a seeded generator gives
/// reproducible points.
pub fn random_point<R: rand::Rng + ?Sized>(
    center: &GeoPoint,
    radius: f64,
    rng: &mut R,
) -> Result<GeoPoint, Error> {
    if !(radius >= 0. && radius.is_finite()) {
        return Err(Error::InvalidArgument("radius must be finite and non-negative"));
    }
    let bearing = rng.gen::<f64>() * 360.;
    let distance = rng.gen::<f64>() * radius;
    destination(center, distance, bearing)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn shortcuts() -> Result<(), Error> {
        let cph = GeoPoint::new(55., 12.);
        let par = GeoPoint::new(49., 2.);

        let d = distance(&cph, &par)?;
        let db = distance_and_bearing(&cph, &par)?;
        assert_eq!(d, db.distance);
        assert_eq!(bearing(&cph, &par)?, db.final_bearing);

        let back = destination(&cph, db.distance, db.initial_bearing)?;
        assert_float_eq!(back.latitude, par.latitude, abs <= 1e-9);
        assert_float_eq!(back.longitude, par.longitude, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn circles() -> Result<(), Error> {
        let center = GeoPoint::new(30., 120.);
        let point = destination(&center, 100., 45.)?;
        assert!(is_point_in_circle(&point, &center, 100.5, 0.)?);
        assert!(!is_point_in_circle(&point, &center, 100.5, 1.)?);
        assert!(!is_point_in_circle(&point, &center, 99.5, 0.)?);
        Ok(())
    }

    #[test]
    fn random_points() -> Result<(), Error> {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let center = GeoPoint::new(31.695557, 119.801582);
        let mut rng = StdRng::seed_from_u64(1975);
        let points = (0..100)
            .map(|_| random_point(&center, 250., &mut rng))
            .collect::<Result<Vec<GeoPoint>, Error>>()?;
        for point in &points {
            assert!(is_point_in_circle(point, &center, 250., -1e-6)?);
        }

        // Spread out in all directions
        assert!(points.iter().any(|p| p.latitude > center.latitude));
        assert!(points.iter().any(|p| p.latitude < center.latitude));
        assert!(points.iter().any(|p| p.longitude > center.longitude));
        assert!(points.iter().any(|p| p.longitude < center.longitude));

        // Same seed, same points
        let mut rng = StdRng::seed_from_u64(1975);
        assert_eq!(random_point(&center, 250., &mut rng)?, points[0]);

        assert_eq!(random_point(&center, 0., &mut rng)?, center);
        assert!(matches!(
            random_point(&center, -1., &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn error_messages() {
        let e = Error::TooFewPoints {
            required: 2,
            found: 1,
        };
        assert_eq!(
            e.to_string(),
            "too few points (expected at least 2, found 1)"
        );
        let e = Error::NonConvergence { iterations: 100 };
        assert!(e.to_string().contains("100 iterations"));
    }
}

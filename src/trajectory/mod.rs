//! Track utilities built on the geodesics of the WGS84 ellipsoid:
//! total length, resampling at fixed spacing, simplification, and
//! snapping of points and tracks onto a reference route.
//!
//! All functions are pure: they read the input slices and return new
//! polylines. Functions that need at least two points fail with
//! [`Error::TooFewPoints`] rather than returning a degenerate result.
use crate::internal::*;
use crate::Polyline;

mod simplify;
mod snap;

pub use simplify::simplify;
pub use simplify::PASS_THROUGH_LIMIT;
pub use snap::nearest_segments;
pub use snap::project_line_onto_reference;
pub use snap::project_line_with_point;
pub use snap::project_onto_segment;
pub use snap::project_point_onto_line;
pub use snap::MAX_CANDIDATES;

/// Default tolerance, in meters, when comparing candidate segments for snapping
pub const DEFAULT_OFFSET: f64 = 10.0;

/// [`resample`] refuses intervals that would produce more points than this
pub const MAX_RESAMPLED_POINTS: usize = 10_000_000;

pub(crate) fn require_points(points: &[GeoPoint], required: usize) -> Result<(), Error> {
    if points.len() < required {
        return Err(Error::TooFewPoints {
            required,
            found: points.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_tolerance(offset: f64) -> Result<(), Error> {
    if !(offset >= 0. && offset.is_finite()) {
        return Err(Error::InvalidArgument("tolerance must be finite and non-negative"));
    }
    Ok(())
}

/// The length, in meters, of the polyline: the sum of the geodesic distances
/// between consecutive points. Zero for fewer than two points.
pub fn total_distance(points: &[GeoPoint]) -> Result<f64, Error> {
    let ellps = Ellipsoid::default();
    points
        .windows(2)
        .map(|pair| ellps.distance(&pair[0], &pair[1]))
        .sum()
}

// ----- Resampling ------------------------------------------------------------

/// State threaded through the segments while resampling
struct Resampler {
    interval: f64,
    // Distance covered by the segments visited so far
    travelled: f64,
    // Number of interval marks passed, and the position of the latest
    crossings: usize,
    last_crossing: f64,
    points: Polyline,
}

impl Resampler {
    fn new(interval: f64, first: GeoPoint) -> Resampler {
        Resampler {
            interval,
            travelled: 0.,
            crossings: 0,
            last_crossing: 0.,
            points: vec![first],
        }
    }

    fn segment(mut self, ellps: &Ellipsoid, from: &GeoPoint, to: &GeoPoint) -> Result<Self, Error> {
        let geodesic = ellps.geodesic_inv(from, to)?;

        // A zero length segment cannot contain a crossing
        if geodesic.distance <= 0. {
            return Ok(self);
        }

        let reached = self.travelled + geodesic.distance;
        let due = (reached / self.interval).floor();
        if due >= MAX_RESAMPLED_POINTS as f64 {
            return Err(Error::InvalidArgument("interval too small for the length of the polyline"));
        }
        let due = due as usize;
        while self.crossings < due {
            let mark = (self.crossings + 1) as f64 * self.interval;
            let point = ellps.destination(from, mark - self.travelled, geodesic.initial_bearing)?;
            self.points.push(point);
            self.crossings += 1;
            self.last_crossing = mark;
        }
        self.travelled = reached;
        Ok(self)
    }

    fn finish(mut self, last: GeoPoint) -> Polyline {
        // A mark falling exactly on the end point is represented by the end point itself
        if self.crossings > 0 && (self.travelled - self.last_crossing).abs() < 1e-6 {
            self.points.pop();
        }
        self.points.push(last);
        self.points
    }
}

/// Resample a polyline at fixed spacing.
///
/// Walking along `points`, a new point is emitted each time the distance
/// travelled passes a multiple of `interval` meters. The new points are
/// interpolated along the geodesic of the segment where the crossing happens,
/// so the original vertices are not retained, except the first and the last,
/// which are always included.
///
/// Fails with [`Error::InvalidArgument`] if the interval would split the
/// polyline into more than [`MAX_RESAMPLED_POINTS`] pieces.
///
/// ```rust
/// use latlng::prelude::*;
/// use latlng::trajectory::{resample, total_distance};
/// # fn main() -> Result<(), Error> {
/// let track = [GeoPoint::new(0., 0.), GeoPoint::new(0., 0.01)];
/// let resampled = resample(&track, 100.)?;
/// // 1113 m: 11 interval marks, plus the end points
/// assert_eq!(resampled.len(), 13);
/// assert!((total_distance(&resampled)? - total_distance(&track)?).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn resample(points: &[GeoPoint], interval: f64) -> Result<Polyline, Error> {
    require_points(points, 2)?;
    if !(interval > 0. && interval.is_finite()) {
        return Err(Error::InvalidArgument("interval must be finite and positive"));
    }

    let ellps = Ellipsoid::default();
    let resampler = points
        .windows(2)
        .try_fold(Resampler::new(interval, points[0]), |resampler, pair| {
            resampler.segment(&ellps, &pair[0], &pair[1])
        })?;
    debug!(
        "resample: {} points, {} m, {} marks of {interval} m",
        points.len(),
        resampler.travelled,
        resampler.crossings
    );

    Ok(resampler.finish(points[points.len() - 1]))
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    // Points due east along the equator, `spacing` meters apart
    pub(crate) fn equator(n: usize, spacing: f64) -> Result<Polyline, Error> {
        let ellps = Ellipsoid::default();
        let origin = GeoPoint::new(0., 0.);
        (0..n)
            .map(|i| ellps.destination(&origin, i as f64 * spacing, 90.))
            .collect()
    }

    #[test]
    fn totals() -> Result<(), Error> {
        assert_eq!(total_distance(&[])?, 0.);
        assert_eq!(total_distance(&[GeoPoint::new(31., 120.)])?, 0.);

        let p = GeoPoint::new(31.695557, 119.801582);
        let q = GeoPoint::new(31.695551, 119.803146);
        assert_eq!(total_distance(&[p, q])?, crate::distance(&p, &q)?);

        let line = equator(6, 100.)?;
        assert_float_eq!(total_distance(&line)?, 500., abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn resampling() -> Result<(), Error> {
        let line = equator(4, 100.)?;

        // 300 m at 70 m: marks at 70, 140, 210, 280
        let resampled = resample(&line, 70.)?;
        assert_eq!(resampled.len(), 6);
        assert_eq!(resampled[0], line[0]);
        assert_eq!(resampled[5], line[3]);
        let ellps = Ellipsoid::default();
        for (i, p) in resampled[1..5].iter().enumerate() {
            let d = ellps.distance(&line[0], p)?;
            assert_float_eq!(d, 70. * (i + 1) as f64, abs <= 1e-6);
        }

        // Interval longer than the line: just the end points
        let resampled = resample(&line, 1000.)?;
        assert_eq!(resampled, vec![line[0], line[3]]);
        Ok(())
    }

    #[test]
    fn resampling_degenerate_segments() -> Result<(), Error> {
        let line = equator(3, 100.)?;
        let stuttering = vec![line[0], line[1], line[1], line[1], line[2]];
        let resampled = resample(&stuttering, 30.)?;
        // marks at 30, 60, ..., 180, then the end point
        assert_eq!(resampled.len(), 8);
        assert_float_eq!(total_distance(&resampled)?, 200., abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn resampling_exact_end() -> Result<(), Error> {
        let line = equator(3, 100.)?;
        let resampled = resample(&line, 50.)?;
        // marks at 50, 100, 150; the mark at 200 is the end point
        assert_eq!(resampled.len(), 5);
        assert_eq!(resampled[4], line[2]);
        Ok(())
    }

    #[test]
    fn preconditions() -> Result<(), Error> {
        let line = equator(3, 100.)?;
        assert_eq!(
            resample(&line[..1], 10.),
            Err(Error::TooFewPoints {
                required: 2,
                found: 1
            })
        );
        assert!(matches!(resample(&line, 0.), Err(Error::InvalidArgument(_))));
        assert!(matches!(resample(&line, -5.), Err(Error::InvalidArgument(_))));
        assert!(matches!(resample(&line, f64::NAN), Err(Error::InvalidArgument(_))));

        // Valid, but absurdly fine: rejected before any point is produced
        assert!(matches!(resample(&line, 1e-300), Err(Error::InvalidArgument(_))));
        assert!(matches!(resample(&line, 1e-5), Err(Error::InvalidArgument(_))));
        assert!(resample(&line[..2], 1e-3).is_ok());
        assert!(require_tolerance(-1.).is_err());
        assert!(require_tolerance(0.).is_ok());
        Ok(())
    }
}

use crate::transform::CoordinateSystem;

/// A position given by geographical latitude and longitude, in degrees.
///
/// `GeoPoint`s are plain values: operations on them return new points
/// rather than modifying the ones given.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north, within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, positive east, within [-180, 180]
    pub longitude: f64,
}

/// An ordered sequence of points: a track, or a reference route.
pub type Polyline = Vec<GeoPoint>;

/// The solution of the inverse geodetic problem between two points.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct DistanceBearing {
    /// Length of the geodesic, in meters
    pub distance: f64,
    /// Bearing at the point of departure, degrees clockwise from north, in [0, 360)
    pub initial_bearing: f64,
    /// Bearing at the point of arrival, degrees clockwise from north, in [0, 360)
    pub final_bearing: f64,
}

impl GeoPoint {
    /// A `GeoPoint` from latitude and longitude, in that order, in degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// A `GeoPoint` from longitude and latitude, in that order, in degrees.
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude)
    }

    /// Latitude and longitude in radians, for internal trigonometry
    #[must_use]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Inverse of [`to_radians`](GeoPoint::to_radians)
    #[must_use]
    pub(crate) fn from_radians(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude.to_degrees(), longitude.to_degrees())
    }

    /// The same position, expressed in the coordinate system `to`,
    /// given that `self` is expressed in the system `from`.
    ///
    /// ```rust
    /// use latlng::prelude::*;
    /// let wgs = GeoPoint::new(29.7378, 103.5863);
    /// let gcj = wgs.convert(CoordinateSystem::Wgs84, CoordinateSystem::Gcj02);
    /// assert!((gcj.longitude - 103.588_259_343_575_66).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn convert(self, from: CoordinateSystem, to: CoordinateSystem) -> GeoPoint {
        from.convert(to, self)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn constructors() {
        let geo = GeoPoint::new(55., 12.);
        let gis = GeoPoint::gis(12., 55.);
        assert_eq!(geo, gis);
        assert_eq!(geo.latitude, 55.);
        assert_eq!(geo.longitude, 12.);

        let (lat, lon) = geo.to_radians();
        let back = GeoPoint::from_radians(lat, lon);
        assert_float_eq!(back.latitude, geo.latitude, abs <= 1e-12);
        assert_float_eq!(back.longitude, geo.longitude, abs <= 1e-12);
    }
}

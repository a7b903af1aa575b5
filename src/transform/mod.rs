//! Conversion between the WGS84, GCJ02 and BD09 coordinate systems.
//!
//! GCJ02 is the obfuscated coordinate system mandated for maps of mainland
//! China, BD09 is Baidu's further obfuscation of GCJ02
//! (see [Gcj02](crate::Bibliography::Gcj02)). The conversion formulas are
//! the published, reverse engineered ones. They are empirical, and the
//! WGS84 ← GCJ02 direction is an approximation: A round trip
//! WGS84 → GCJ02 → WGS84 leaves a residual at the meter level.
//! This asymmetry is a property of the published algorithm, and is kept
//! as is, for compatibility with existing map data.
//!
//! All functions take and return `(longitude, latitude)` in degrees.

mod bd09;
mod gcj02;

pub use bd09::bd09_to_gcj02;
pub use bd09::gcj02_to_bd09;
pub use gcj02::gcj02_to_wgs84;
pub use gcj02::out_of_china;
pub use gcj02::wgs84_to_gcj02;

use crate::GeoPoint;

/// The coordinate systems handled by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// The global GNSS reference system. Also used by Google maps outside China
    Wgs84,
    /// The Chinese "Mars coordinates": WGS84 obfuscated by the national
    /// surveying bureau. Used by most maps of mainland China
    Gcj02,
    /// Baidu maps: GCJ02 further obfuscated
    Bd09,
}

/// WGS84 → BD09, via GCJ02
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(lng, lat)
}

/// BD09 → WGS84, via GCJ02
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(lng, lat)
}

impl CoordinateSystem {
    /// Convert `point`, given in `self`, to the system `to`.
    /// Converting to the same system returns `point` unchanged.
    #[must_use]
    pub fn convert(self, to: CoordinateSystem, point: GeoPoint) -> GeoPoint {
        use CoordinateSystem::*;
        let conversion: fn(f64, f64) -> (f64, f64) = match (self, to) {
            (Wgs84, Gcj02) => wgs84_to_gcj02,
            (Wgs84, Bd09) => wgs84_to_bd09,
            (Gcj02, Wgs84) => gcj02_to_wgs84,
            (Gcj02, Bd09) => gcj02_to_bd09,
            (Bd09, Wgs84) => bd09_to_wgs84,
            (Bd09, Gcj02) => bd09_to_gcj02,
            (Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => return point,
        };
        let (lng, lat) = conversion(point.longitude, point.latitude);
        GeoPoint::gis(lng, lat)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use CoordinateSystem::*;

    #[test]
    fn dispatch() {
        let wgs = GeoPoint::new(29.7378, 103.5863);
        let systems = [Wgs84, Gcj02, Bd09];

        // The identities
        for system in systems {
            assert_eq!(system.convert(system, wgs), wgs);
        }

        // Each pair goes through the matching free function
        let gcj = Wgs84.convert(Gcj02, wgs);
        let (lng, lat) = wgs84_to_gcj02(wgs.longitude, wgs.latitude);
        assert_eq!(gcj, GeoPoint::gis(lng, lat));

        let bd = Wgs84.convert(Bd09, wgs);
        assert_eq!(bd, Gcj02.convert(Bd09, gcj));

        let (lng, lat) = bd09_to_wgs84(bd.longitude, bd.latitude);
        assert_eq!(Bd09.convert(Wgs84, bd), GeoPoint::gis(lng, lat));
        assert_eq!(Bd09.convert(Gcj02, bd), bd.convert(Bd09, Gcj02));
        assert_eq!(Gcj02.convert(Wgs84, gcj), gcj.convert(Gcj02, Wgs84));
    }

    #[test]
    fn roundtrips() {
        // All pairs: A → B → A stays within a few meters inside China
        let systems = [Wgs84, Gcj02, Bd09];
        let points = [
            GeoPoint::new(29.7378, 103.5863),
            GeoPoint::new(31.695557, 119.801582),
            GeoPoint::new(39.9042, 116.4074),
            GeoPoint::new(22.5431, 114.0579),
        ];
        for p in points {
            for from in systems {
                for to in systems {
                    let back = to.convert(from, from.convert(to, p));
                    assert_float_eq!(back.latitude, p.latitude, abs <= 5e-5);
                    assert_float_eq!(back.longitude, p.longitude, abs <= 5e-5);
                }
            }
        }
    }

    #[test]
    fn outside_china() {
        // Copenhagen: WGS84 and GCJ02 coincide, BD09 does not
        let cph = GeoPoint::new(55.68, 12.57);
        assert_eq!(Wgs84.convert(Gcj02, cph), cph);
        assert_eq!(Gcj02.convert(Wgs84, cph), cph);
        assert_ne!(Wgs84.convert(Bd09, cph), cph);
    }
}

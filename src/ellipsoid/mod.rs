mod geodesics;
mod latitudes;

pub use geodesics::CONVERGENCE_THRESHOLD;
pub use geodesics::MAX_ITERATIONS;

use crate::Error;

/// Representation of a biaxial ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        match name {
            "WGS84" => Ok(Ellipsoid::default()),
            "GRS80" => Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)),
            "intl" => Ok(Ellipsoid::new(6_378_388.0, 1. / 297.0)),
            // Krasovsky 1940: the ellipsoid underlying GCJ02
            "krass" => Ok(Ellipsoid::new(6_378_245.0, 1. / 298.3)),
            "bessel" => Ok(Ellipsoid::new(6_377_397.155, 1. / 299.152_812_8)),
            "clrk66" => Ok(Ellipsoid::new(6_378_206.4, 1. / 294.978_698_2)),
            _ => Err(Error::NotFound(format!("ellipsoid {name}"))),
        }
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Axes and flattening ---------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }
}

// ----- Tests ---------------------------------------------------------------------

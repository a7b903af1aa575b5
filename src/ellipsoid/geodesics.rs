use crate::internal::*;
use std::f64::consts::FRAC_PI_2;
use std::f64::consts::PI;

/// Upper limit on the number of iterations in the geodesic solutions
pub const MAX_ITERATIONS: usize = 100;

/// Stop criterion for the geodesic iterations: the change in λ (inverse)
/// or σ (direct), in radians, between two successive iterations
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

// Below this value of sin²σ, the two points are considered coincident
const COINCIDENCE_THRESHOLD: f64 = 1e-24;

// σ, α and cos 2σ_m on the auxiliary sphere, for a given λ
struct AuxiliarySphere {
    llsin: f64,
    llcos: f64,
    sssin2: f64,
    sssin: f64,
    sscos: f64,
    ss: f64,
    aasin: f64,
    aacos2: f64,
    ssmx2cos: f64,
}

impl AuxiliarySphere {
    #[allow(non_snake_case)]
    fn new(U1: (f64, f64), U2: (f64, f64), ll: f64) -> AuxiliarySphere {
        let (U1sin, U1cos) = U1;
        let (U2sin, U2cos) = U2;
        let (llsin, llcos) = ll.sin_cos();

        // σ, the angular separation between the points
        let t1 = U2cos * llsin;
        let t2 = U1cos * U2sin - U1sin * U2cos * llcos;
        let sssin2 = t1 * t1 + t2 * t2;
        let sssin = sssin2.sqrt();
        let sscos = U1sin * U2sin + U1cos * U2cos * llcos;
        let ss = sssin.atan2(sscos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = if sssin == 0. {
            0.
        } else {
            U1cos * U2cos * llsin / sssin
        };
        let aacos2 = 1. - aasin * aasin;

        // cosine of 2 times σ_m, the angular separation from the midpoint to the equator.
        // Zero for equatorial lines, where cos²α vanishes
        let ssmx2cos = if aacos2 != 0. {
            sscos - 2. * U1sin * U2sin / aacos2
        } else {
            0.
        };

        AuxiliarySphere {
            llsin,
            llcos,
            sssin2,
            sssin,
            sscos,
            ss,
            aasin,
            aacos2,
            ssmx2cos,
        }
    }
}

// ----- Geodesics -------------------------------------------------------------
impl Ellipsoid {
    /// For general geodesics, we use the algorithm by Vincenty
    /// ([1975](crate::Bibliography::Vin75)), in the form given by
    /// [Veness](crate::Bibliography::Ven02).
    /// The Vincenty algorithm is relatively simple to implement, but for near-antipodal
    /// cases, it suffers from lack of convergence and loss of accuracy.
    ///
    /// Karney ([2013](crate::Bibliography::Kar13)) presented an algorithm which is
    /// exact to machine precision, and converges everywhere. We stay with Vincenty,
    /// and report the failures: [`Error::NonConvergence`] when the iteration cap is
    /// reached, [`Error::Domain`] when λ escapes its valid range in the antipodal
    /// branch. There is no spherical fallback.
    ///
    /// Returns the geodesic distance and the bearings at both ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// // Compute the distance between Copenhagen and Paris
    /// use latlng::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let ellps = Ellipsoid::named("GRS80")?;
    /// let cph = GeoPoint::new(55., 12.);
    /// let par = GeoPoint::new(49., 2.);
    /// let d = ellps.geodesic_inv(&cph, &par)?;
    /// assert!((d.distance - 956_066.231_959).abs() < 1e-3);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn geodesic_inv(&self, from: &GeoPoint, to: &GeoPoint) -> Result<DistanceBearing, Error> {
        let (B1, L1) = from.to_radians();
        let (B2, L2) = to.to_radians();
        let L = angular::normalize_symmetric(L2 - L1);

        // The latitudes of P1 and P2 projected onto the auxiliary sphere
        let U1 = self.reduced_latitude_trigs(B1);
        let U2 = self.reduced_latitude_trigs(B2);

        // Antipodal cases need a different starting point for σ
        let antipodal = L.abs() > FRAC_PI_2 || (B2 - B1).abs() > FRAC_PI_2;

        // Initial estimate for λ, the longitude on the auxiliary sphere
        let mut ll = L;

        let mut i = 0_usize;
        let aux = loop {
            let aux = AuxiliarySphere::new(U1, U2, ll);

            // Coincident points, or exactly antipodal along a meridian: σ is
            // 0 or π, and the bearings are undefined
            if aux.sssin2 < COINCIDENCE_THRESHOLD {
                let ss = if antipodal { PI } else { 0. };
                let (A, _) = self.vincenty_coefficients(1.);
                return Ok(DistanceBearing {
                    distance: self.semiminor_axis() * A * ss,
                    initial_bearing: 0.,
                    final_bearing: 0.,
                });
            }

            let C = self.vincenty_c(aux.aacos2);
            let prev = ll;
            ll = L
                + (1. - C)
                    * self.f
                    * aux.aasin
                    * (aux.ss
                        + C * aux.sssin
                            * (aux.ssmx2cos
                                + C * aux.sscos * (-1. + 2. * aux.ssmx2cos * aux.ssmx2cos)));
            i += 1;

            let excess = if antipodal { ll.abs() - PI } else { ll.abs() };
            if excess > PI {
                warn!("geodesic_inv: λ > π between {from:?} and {to:?}");
                return Err(Error::Domain("λ > π"));
            }

            // Stop criterion: Last update of λ made little difference.
            // σ and α are then evaluated at the final λ, not the previous one
            if (ll - prev).abs() <= CONVERGENCE_THRESHOLD {
                break AuxiliarySphere::new(U1, U2, ll);
            }
            if i >= MAX_ITERATIONS {
                warn!("geodesic_inv: no convergence between {from:?} and {to:?}");
                return Err(Error::NonConvergence { iterations: i });
            }
        };
        trace!("geodesic_inv: {i} iterations");

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let (A, B) = self.vincenty_coefficients(aux.aacos2);
        let dss = Self::vincenty_delta_sigma(B, aux.sssin, aux.sscos, aux.ssmx2cos);

        // Distance, forward azimuth, return azimuth
        let (U1sin, U1cos) = U1;
        let (U2sin, U2cos) = U2;
        let s = self.semiminor_axis() * A * (aux.ss - dss);
        let a1 = (U2cos * aux.llsin).atan2(U1cos * U2sin - U1sin * U2cos * aux.llcos);
        let a2 = (U1cos * aux.llsin).atan2(-U1sin * U2cos + U1cos * U2sin * aux.llcos);

        Ok(DistanceBearing {
            distance: s,
            initial_bearing: angular::normalize_degrees(a1.to_degrees()),
            final_bearing: angular::normalize_degrees(a2.to_degrees()),
        })
    }

    /// The direct geodetic problem: Starting at `from`, travel `distance`
    /// meters along the geodesic leaving with the bearing `azimuth` (degrees
    /// clockwise from north).
    ///
    /// Returns the destination and the bearing on arrival. A zero distance
    /// returns the point of origin unchanged.
    ///
    /// See [`geodesic_inv`](crate::Ellipsoid::geodesic_inv)
    #[allow(non_snake_case)]
    pub fn geodesic_fwd(
        &self,
        from: &GeoPoint,
        distance: f64,
        azimuth: f64,
    ) -> Result<(GeoPoint, f64), Error> {
        if distance == 0. {
            return Ok((*from, angular::normalize_degrees(azimuth)));
        }

        // Coordinates of the point of origin, P1
        let (B1, L1) = from.to_radians();
        let azimuth = azimuth.to_radians();
        let azisin = azimuth.sin();
        let azicos = azimuth.cos();

        // The latitude of P1 projected onto the auxiliary sphere
        let (U1sin, U1cos) = self.reduced_latitude_trigs(B1);

        // σ_1, here ss1, is the angular distance on the aux sphere from P1 to equator
        let ss1 = (U1sin / U1cos).atan2(azicos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = U1cos * azisin;
        let aacos2 = 1. - aasin * aasin;

        let (A, B) = self.vincenty_coefficients(aacos2);

        // Initial estimate for σ, the angular distance on the auxiliary sphere
        let b = self.semiminor_axis();
        let mut ss = distance / (b * A);

        let mut i = 0_usize;
        loop {
            // 2σ_m, where σ_m is the latitude of the midpoint on the aux sphere
            let ssmx2cos = (2. * ss1 + ss).cos();
            let dss = Self::vincenty_delta_sigma(B, ss.sin(), ss.cos(), ssmx2cos);

            let prev = ss;
            ss = distance / (b * A) + dss;
            i += 1;

            // Stop criterion: Last update of σ made little difference
            if (prev - ss).abs() <= CONVERGENCE_THRESHOLD {
                break;
            }
            if i >= MAX_ITERATIONS {
                warn!("geodesic_fwd: no convergence from {from:?}, distance {distance}");
                return Err(Error::NonConvergence { iterations: i });
            }
        }
        trace!("geodesic_fwd: {i} iterations");

        let sssin = ss.sin();
        let sscos = ss.cos();
        let ssmx2cos = (2. * ss1 + ss).cos();

        // B2: Latitude of destination
        let x = U1sin * sssin - U1cos * sscos * azicos;
        let B2 = (U1sin * sscos + U1cos * sssin * azicos).atan2((1. - self.f) * aasin.hypot(x));

        // L2: Longitude of destination
        let ll = (sssin * azisin).atan2(U1cos * sscos - U1sin * sssin * azicos);
        let C = self.vincenty_c(aacos2);
        let L = ll
            - (1. - C)
                * self.f
                * aasin
                * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));
        let L2 = angular::normalize_symmetric(L1 + L);

        // Return azimuth
        let aa2 = aasin.atan2(-x);

        Ok((
            GeoPoint::from_radians(B2, L2),
            angular::normalize_degrees(aa2.to_degrees()),
        ))
    }

    /// Geodesic distance between two points, in meters.
    pub fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64, Error> {
        Ok(self.geodesic_inv(from, to)?.distance)
    }

    /// Direction of travel, in degrees, along the geodesic from `from` to `to`,
    /// as seen on arrival at `to`.
    pub fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64, Error> {
        Ok(self.geodesic_inv(from, to)?.final_bearing)
    }

    /// The destination point of [`geodesic_fwd`](crate::Ellipsoid::geodesic_fwd),
    /// without the return azimuth.
    pub fn destination(
        &self,
        from: &GeoPoint,
        distance: f64,
        azimuth: f64,
    ) -> Result<GeoPoint, Error> {
        Ok(self.geodesic_fwd(from, distance, azimuth)?.0)
    }

    /// The point at `fraction` of the way along the geodesic from `from` to `to`.
    pub fn point_at_fraction(
        &self,
        from: &GeoPoint,
        to: &GeoPoint,
        fraction: f64,
    ) -> Result<GeoPoint, Error> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidArgument("fraction must be within [0, 1]"));
        }
        let inv = self.geodesic_inv(from, to)?;
        self.destination(from, inv.distance * fraction, inv.initial_bearing)
    }

    // ----- Series shared by the direct and inverse solutions -----------------

    /// Vincenty's A and B, from u² = cos²α · e'²
    #[allow(non_snake_case)]
    fn vincenty_coefficients(&self, aacos2: f64) -> (f64, f64) {
        let us = aacos2 * self.second_eccentricity_squared();
        let A = 1. + us / 16384. * (4096. + us * (-768. + us * (320. - 175. * us)));
        let B = us / 1024. * (256. + us * (-128. + us * (74. - 47. * us)));
        (A, B)
    }

    /// The λ correction coefficient, C
    fn vincenty_c(&self, aacos2: f64) -> f64 {
        self.f / 16. * aacos2 * (4. + self.f * (4. - 3. * aacos2))
    }

    /// Δσ: the difference between the angular distance on the auxiliary
    /// sphere and the one corresponding to the length on the ellipsoid
    #[allow(non_snake_case)]
    fn vincenty_delta_sigma(B: f64, sssin: f64, sscos: f64, ssmx2cos: f64) -> f64 {
        let ssmx2cos2 = ssmx2cos * ssmx2cos;
        let t1 = -1. + 2. * ssmx2cos2;
        let t2 = -3. + 4. * sssin * sssin;
        let t3 = -3. + 4. * ssmx2cos2;
        B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3))
    }
}

// ----- Tests ---------------------------------------------------------------------

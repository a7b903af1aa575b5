use super::*;

// ----- Latitudes -------------------------------------------------------------
impl Ellipsoid {
    /// Geographic latitude, 𝜙, to reduced latitude, 𝛽, from tan 𝛽 = (1 - f) tan 𝜙
    #[must_use]
    pub fn latitude_geographic_to_reduced(&self, latitude: f64) -> f64 {
        latitude.tan().atan2(1. / (1. - self.f))
    }

    /// Sine and cosine of the reduced latitude, 𝛽, as used by the geodesic
    /// solutions on the auxiliary sphere
    #[must_use]
    pub(crate) fn reduced_latitude_trigs(&self, latitude: f64) -> (f64, f64) {
        self.latitude_geographic_to_reduced(latitude).sin_cos()
    }
}

// ----- Tests ---------------------------------------------------------------------

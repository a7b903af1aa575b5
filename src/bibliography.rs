/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// T. Vincenty (1975) *Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations*.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// Chris Veness (2002-2022): *Vincenty solutions of geodesics on the ellipsoid*.
    /// [html](http://www.movable-type.co.uk/scripts/latlong-vincenty.html).
    /// Includes the antipodal starting guess used by the inverse solution.
    Ven02,

    /// Charles F.F. Karney (2013) *Algorithms for geodesics*. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z).
    /// Converges everywhere, including the near-antipodal cases where Vincenty fails.
    Kar13,

    /// David H. Douglas and Thomas K. Peucker (1973): *Algorithms for the reduction
    /// of the number of points required to represent a digitized line or its caricature*.
    /// Cartographica 10(2), pp. 112–122.
    /// [DOI](https://doi.org/10.3138/FM57-6770-U75U-7727).
    Dou73,

    /// Wikipedia: *Restrictions on geographic data in China*. Describes the
    /// GCJ-02 obfuscation and the BD-09 derivative.
    /// [html](https://en.wikipedia.org/wiki/Restrictions_on_geographic_data_in_China).
    Gcj02,
}

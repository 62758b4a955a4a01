use lazy_static::lazy_static;

use crate::{constants::GK_K0, ellipsoid::{Ellipsoid, KRASOVSKY_1940}, utility::polyval};

// ================================
// Meridian arc constants
// ================================

// Coefficients of the meridian arc series, each a polynomial in the third
// flattening n of order 3, highest order first.
const ARC_COEFF: [[f64; 4]; 4] = [
    // 1 + n + 5/4 n^2 + 5/4 n^3
    [5. / 4., 5. / 4., 1., 1.],
    // 3n + 3n^2 + 21/8 n^3
    [21. / 8., 3., 3., 0.],
    // 15/8 n^2 + 15/8 n^3
    [15. / 8., 15. / 8., 0., 0.],
    // 35/24 n^3
    [35. / 24., 0., 0., 0.],
];

lazy_static! {
    pub(crate) static ref SK42: TransverseMercator = TransverseMercator::sk42();
}

/// Gauss-Krüger forward projection on a single ellipsoid, evaluated with the
/// Redfearn series truncated at the sixth power of the longitude difference.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TransverseMercator {
    ellipsoid: Ellipsoid,
    k0: f64,
    // Latitude of the origin in radians
    lat0: f64,
    arc: [f64; 4],
}

/// Series coefficients for one latitude. `i` is the meridian arc, `ii`, `iii`
/// and `iiia` multiply the even powers of the longitude difference in the
/// northing, `iv`, `v` and `vi` the odd powers in the easting.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Coefficients {
    pub i: f64,
    pub ii: f64,
    pub iii: f64,
    pub iiia: f64,
    pub iv: f64,
    pub v: f64,
    pub vi: f64,
}

impl TransverseMercator {
    pub fn sk42() -> TransverseMercator {
        TransverseMercator::new(&KRASOVSKY_1940, GK_K0, 0.)
    }

    pub fn new(ellipsoid: &Ellipsoid, k0: f64, lat0: f64) -> TransverseMercator {
        let n = ellipsoid.third_flattening();

        let mut arc = [0_f64; 4];
        for (c, coeff) in arc.iter_mut().zip(ARC_COEFF.iter()) {
            *c = polyval(coeff, n);
        }

        Self {
            ellipsoid: *ellipsoid,
            k0,
            lat0,
            arc,
        }
    }

    /// Meridian arc length in meters from the origin latitude to `lat` (radians),
    /// scaled by the central scale factor.
    pub fn meridian_arc(&self, lat: f64) -> f64 {
        let diff = lat - self.lat0;
        let sum = lat + self.lat0;

        let m1 = self.arc[0] * diff;
        let m2 = self.arc[1] * diff.sin() * sum.cos();
        let m3 = self.arc[2] * (2. * diff).sin() * (2. * sum).cos();
        let m4 = self.arc[3] * (3. * diff).sin() * (3. * sum).cos();

        self.ellipsoid.semi_minor_axis() * self.k0 * (m1 - m2 + m3 - m4)
    }

    /// Series coefficients at latitude `lat` (radians).
    pub fn coefficients(&self, lat: f64) -> Coefficients {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan2 = lat.tan().powi(2);

        // Transverse and meridional radii of curvature
        let v = self.k0 * self.ellipsoid.prime_vertical_radius(lat);
        let p = self.k0 * self.ellipsoid.meridional_radius(lat);
        let eta2 = v / p - 1.;

        Coefficients {
            i: self.meridian_arc(lat),
            ii: v / 2. * sin_lat * cos_lat,
            iii: v / 24. * sin_lat * cos_lat.powi(3) * (5. - tan2 + 9. * eta2),
            iiia: v / 720. * sin_lat * cos_lat.powi(5) * (61. - 58. * tan2 + tan2.powi(2)),
            iv: v * cos_lat,
            v: v / 6. * cos_lat.powi(3) * (v / p - tan2),
            vi: v / 120. * cos_lat.powi(5)
                * (5. - 18. * tan2 + tan2.powi(2) + 14. * eta2 - 58. * tan2 * eta2),
        }
    }

    /// Projects `lat`/`lon` (degrees) relative to the central meridian `lon0`
    /// (radians). Returns `(x, y)`: easting and northing without false offsets.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let c = self.coefficients(lat.to_radians());
        let dl = lon.to_radians() - lon0;

        let x = c.iv * dl + c.v * dl.powi(3) + c.vi * dl.powi(5);
        let y = c.i + c.ii * dl.powi(2) + c.iii * dl.powi(4) + c.iiia * dl.powi(6);

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn arc_is_zero_at_equator_and_odd() {
        assert_abs_diff_eq!(SK42.meridian_arc(0.), 0.);
        let lat = 0.7_f64;
        assert_abs_diff_eq!(SK42.meridian_arc(-lat), -SK42.meridian_arc(lat), epsilon = 1e-6);
    }

    #[test]
    fn quarter_meridian_length() {
        // Equator to pole on the Krasovsky ellipsoid
        let quarter = SK42.meridian_arc(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(quarter, 10_002_137.5, epsilon = 1.);
    }

    #[test]
    fn central_meridian_maps_to_arc() {
        let (x, y) = SK42.from_latlon(39_f64.to_radians(), 55.75, 39.);
        assert_abs_diff_eq!(x, 0.);
        assert_abs_diff_eq!(y, SK42.meridian_arc(55.75_f64.to_radians()));
    }

    #[test]
    fn equator_has_no_northing() {
        let (x, y) = SK42.from_latlon(3_f64.to_radians(), 0., 4.);
        assert_abs_diff_eq!(y, 0.);
        assert!(x > 111_000. && x < 112_000.);
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let lon0 = 33_f64.to_radians();
        let (xe, ye) = SK42.from_latlon(lon0, 48.2, 35.5);
        let (xw, yw) = SK42.from_latlon(lon0, 48.2, 30.5);
        assert_abs_diff_eq!(xe, -xw, epsilon = 1e-6);
        assert_abs_diff_eq!(ye, yw, epsilon = 1e-6);
    }
}

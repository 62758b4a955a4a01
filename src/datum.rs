use lazy_static::lazy_static;

use crate::{constants::RHO, ellipsoid::Ellipsoid, geographic::Datum, utility::GeoMath};

/// Seven-parameter Helmert elements for a datum pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatumShift {
    /// Translation along X in meters
    pub dx: f64,
    /// Translation along Y in meters
    pub dy: f64,
    /// Translation along Z in meters
    pub dz: f64,
    /// Rotation about X in arcseconds
    pub wx: f64,
    /// Rotation about Y in arcseconds
    pub wy: f64,
    /// Rotation about Z in arcseconds
    pub wz: f64,
    /// Differential scale difference (dimensionless)
    pub scale: f64,
}

impl DatumShift {
    /// No translation, rotation or scaling.
    pub const ZERO: DatumShift = DatumShift {
        dx: 0.,
        dy: 0.,
        dz: 0.,
        wx: 0.,
        wy: 0.,
        wz: 0.,
        scale: 0.,
    };
}

/// Transformation elements for WGS84 ↔ SK42. Rotations and scale are zero in
/// this parameter set but stay in the formula.
pub const WGS84_SK42: DatumShift = DatumShift {
    dx: 23.92,
    dy: -141.27,
    dz: -80.9,
    ..DatumShift::ZERO
};

lazy_static! {
    pub(crate) static ref WGS84_TO_SK42: DatumShifter =
        DatumShifter::new(Datum::Wgs84.ellipsoid(), Datum::Sk42.ellipsoid(), WGS84_SK42);
}

/// Converts geographic coordinates between two ellipsoids with the
/// Molodensky differential formulas.
///
/// The corrections are evaluated on the ellipsoid averaged between `source`
/// and `target`. [`DatumShifter::shift`] goes from `source` to `target` and
/// [`DatumShifter::unshift`] goes back.
#[derive(Clone, Copy, Debug)]
pub struct DatumShifter {
    params: DatumShift,
    // Averaged semi-major axis and eccentricity squared
    a: f64,
    e2: f64,
    // source - target
    da: f64,
    de2: f64,
}

impl DatumShifter {
    pub fn new(source: Ellipsoid, target: Ellipsoid, params: DatumShift) -> DatumShifter {
        Self {
            params,
            a: (target.semi_major_axis() + source.semi_major_axis()) / 2.,
            e2: (target.e2() + source.e2()) / 2.,
            da: source.semi_major_axis() - target.semi_major_axis(),
            de2: source.e2() - target.e2(),
        }
    }

    /// The WGS84 → SK42 (Krasovsky 1940) shifter.
    pub fn wgs84_to_sk42() -> DatumShifter {
        *WGS84_TO_SK42
    }

    pub fn params(&self) -> DatumShift {
        self.params
    }

    fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1. - self.e2 * lat.sin().powi(2)).sqrt()
    }

    fn meridional_radius(&self, lat: f64) -> f64 {
        self.a * (1. - self.e2) / (1. - self.e2 * lat.sin().powi(2)).powf(1.5)
    }

    /// Latitude correction in arcseconds at the given point (degrees, meters).
    pub fn latitude_correction(&self, lat: f64, lon: f64, height: f64) -> f64 {
        let DatumShift { dx, dy, dz, wx, wy, scale, .. } = self.params;
        let (b, l) = (lat.to_radians(), lon.to_radians());
        let (sin_b, cos_b) = b.sin_cos();
        let (sin_l, cos_l) = l.sin_cos();

        let m = self.meridional_radius(b);
        let n = self.prime_vertical_radius(b);
        let rot = 1. + self.e2 * (2. * b).cos();

        RHO / (m + height) * (
            n / self.a * self.e2 * sin_b * cos_b * self.da
            + ((n / self.a).powi(2) + 1.) * n * sin_b * cos_b * self.de2 / 2.
            - (dx * cos_l + dy * sin_l) * sin_b
            + dz * cos_b
        )
        - wx * sin_l * rot
        + wy * cos_l * rot
        - RHO * scale * self.e2 * sin_b * cos_b
    }

    /// Longitude correction in arcseconds at the given point (degrees, meters).
    pub fn longitude_correction(&self, lat: f64, lon: f64, height: f64) -> f64 {
        let DatumShift { dx, dy, wx, wy, wz, .. } = self.params;
        let (b, l) = (lat.to_radians(), lon.to_radians());
        let (sin_l, cos_l) = l.sin_cos();

        let n = self.prime_vertical_radius(b);

        RHO / ((n + height) * b.cos()) * (-dx * sin_l + dy * cos_l)
        + b.tan() * (1. - self.e2) * (wx * cos_l + wy * sin_l)
        - wz
    }

    /// Ellipsoidal height correction in meters at the given point.
    pub fn height_correction(&self, lat: f64, lon: f64, height: f64) -> f64 {
        let DatumShift { dx, dy, dz, wx, wy, scale, .. } = self.params;
        let (b, l) = (lat.to_radians(), lon.to_radians());
        let (sin_b, cos_b) = b.sin_cos();
        let (sin_l, cos_l) = l.sin_cos();

        let n = self.prime_vertical_radius(b);

        -self.a / n * self.da
        + n * sin_b.powi(2) * self.de2 / 2.
        + (dx * cos_l + dy * sin_l) * cos_b
        + dz * sin_b
        - n * self.e2 * sin_b * cos_b * (wx / RHO * sin_l - wy / RHO * cos_l)
        + (self.a.powi(2) / n + height) * scale
    }

    /// Converts a `source` datum position to the `target` datum. Returns
    /// latitude and longitude in degrees and height in meters.
    pub fn shift(&self, lat: f64, lon: f64, height: f64) -> (f64, f64, f64) {
        let d_lat = self.latitude_correction(lat, lon, height);
        let d_lon = self.longitude_correction(lat, lon, height);
        let d_h = self.height_correction(lat, lon, height);

        log::trace!("datum shift at ({lat}, {lon}, {height}): dB={d_lat}\" dL={d_lon}\" dH={d_h}m");

        (lat - d_lat.arcsec_to_deg(), lon - d_lon.arcsec_to_deg(), height - d_h)
    }

    /// Converts a `target` datum position back to the `source` datum.
    pub fn unshift(&self, lat: f64, lon: f64, height: f64) -> (f64, f64, f64) {
        let d_lat = self.latitude_correction(lat, lon, height);
        let d_lon = self.longitude_correction(lat, lon, height);
        let d_h = self.height_correction(lat, lon, height);

        log::trace!("datum unshift at ({lat}, {lon}, {height}): dB={d_lat}\" dL={d_lon}\" dH={d_h}m");

        (lat + d_lat.arcsec_to_deg(), lon + d_lon.arcsec_to_deg(), height + d_h)
    }
}

/// Converts WGS84 latitude/longitude (degrees) and ellipsoidal height (meters)
/// to SK42 latitude/longitude in degrees.
///
/// No range checking is done. At the poles the longitude correction divides by
/// `cos(lat) = 0` and the result is not finite.
///
/// # Usage
///
/// ```
/// use sk42convert::datum::shift;
///
/// let (lat, lon) = shift(55.755826, 37.617300, 0.0);
///
/// assert!((lat - 55.7557).abs() < 1e-3);
/// assert!((lon - 37.6193).abs() < 1e-3);
/// ```
pub fn shift(lat: f64, lon: f64, height: f64) -> (f64, f64) {
    let (lat, lon, _) = WGS84_TO_SK42.shift(lat, lon, height);
    (lat, lon)
}

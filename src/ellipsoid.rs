use crate::constants::{KRASOVSKY_A, KRASOVSKY_F, WGS84_A, WGS84_F};

/// Reference ellipsoid described by its semi-major axis and flattening. All
/// other shape parameters are derived from these two.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84 ellipsoid. GRS80 differs from it by less than 0.1 mm in the semi-minor
/// axis, so it serves for both.
pub const WGS84: Ellipsoid = Ellipsoid::new(WGS84_A, WGS84_F);

/// Krasovsky 1940 ellipsoid, the reference surface of the SK42 datum.
///
/// The semi-minor axis is derived as `a(1 - f)` = 6356863.0188 m rather than
/// taken as the published 6356863.019 m; projected coordinates differ by less
/// than 0.3 mm.
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid::new(KRASOVSKY_A, KRASOVSKY_F);

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Ellipsoid {
        Self { a, f }
    }

    /// Semi-major (equatorial) axis in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Semi-minor (polar) axis in meters: `a(1 - f)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.a * (1. - self.f)
    }

    /// First eccentricity squared: `2f - f²`.
    pub fn e2(&self) -> f64 {
        self.f * (2. - self.f)
    }

    /// Third flattening: `(a - b) / (a + b)`, equivalently `f / (2 - f)`.
    pub fn third_flattening(&self) -> f64 {
        self.f / (2. - self.f)
    }

    /// Radius of curvature in the prime vertical at latitude `lat` (radians).
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1. - self.e2() * lat.sin().powi(2)).sqrt()
    }

    /// Radius of curvature in the meridian at latitude `lat` (radians).
    pub fn meridional_radius(&self, lat: f64) -> f64 {
        let e2 = self.e2();
        self.a * (1. - e2) / (1. - e2 * lat.sin().powi(2)).powf(1.5)
    }
}

// WGS84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// WGS84 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// Krasovsky 1940 semi-major axis a
pub(crate) const KRASOVSKY_A: f64 = 6_378_245.;
// Krasovsky 1940 flattening
pub(crate) const KRASOVSKY_F: f64 = 1.0 / 298.3;

// Arcseconds per radian
#[allow(clippy::unreadable_literal)]
pub(crate) const RHO: f64 = 206264.8062;

// Gauss-Krüger central scale factor
pub(crate) const GK_K0: f64 = 1.0;

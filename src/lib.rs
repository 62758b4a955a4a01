#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

//! Conversion of WGS84 geographic coordinates to SK42 (Pulkovo 1942)
//! Gauss-Krüger rectangular coordinates.
//!
//! The conversion runs in two stages: a Molodensky datum shift from WGS84 to
//! SK42 on the Krasovsky 1940 ellipsoid ([`datum`]), then a 6° zoned
//! Gauss-Krüger projection ([`gauss_kruger`]).
//!
//! ```
//! use sk42convert::GeographicPosition;
//!
//! let coord = GeographicPosition::wgs84(55.755826, 37.617300, 0.0).to_gauss_kruger();
//!
//! assert_eq!(coord.zone(), 7);
//! assert_eq!(coord.grid_reference(), "7 X: 61 82336 Y: 4 13314");
//! ```

use thiserror::Error;

pub mod datum;
pub mod ellipsoid;
pub mod gauss_kruger;
pub mod geographic;

pub use datum::{DatumShift, DatumShifter};
pub use ellipsoid::Ellipsoid;
pub use gauss_kruger::{GaussKruger, ProjectionZone};
pub use geographic::{Datum, GeographicPosition};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Latitude {0} is a pole, where the conversion is singular")]
    PolarSingularity(f64),
    #[error("Gauss-Krüger coords are invalid: {0}")]
    InvalidRectangular(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an error if `value` does not describe a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// # Errors
///
/// Returns an error if `value` does not describe a valid coordinate.
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Converts WGS84 latitude/longitude (degrees) and ellipsoidal height (meters)
/// to SK42 Gauss-Krüger northing and easting in meters. The zone number is the
/// millions prefix of the easting; use [`GaussKruger::from_latlon`] to get it
/// separately.
///
/// No input validation is done, see [`GeographicPosition::create`] for that.
///
/// ```
/// let (northing, easting) = sk42convert::wgs84_to_sk42_meters(55.755826, 37.617300, 0.0);
///
/// assert!((northing - 6_182_335.93).abs() < 1.0);
/// assert!((easting - 7_413_314.27).abs() < 1.0);
/// ```
pub fn wgs84_to_sk42_meters(lat: f64, lon: f64, height: f64) -> (f64, f64) {
    let (lat, lon) = datum::shift(lat, lon, height);
    gauss_kruger::project(lat, lon)
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}

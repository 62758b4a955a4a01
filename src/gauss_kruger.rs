use std::fmt::Display;

use crate::{
    constants::GK_K0,
    datum::WGS84_TO_SK42,
    geographic::{Datum, GeographicPosition},
    projections::transverse_mercator::SK42,
    Error,
};

pub mod zonespec {
    /// Zone width in degrees of longitude
    pub const WIDTH: i32 = 6;
    /// Zone of longitude -180°
    pub const MINZONE: i32 = -29;
    /// Zone of longitudes just below 180°
    pub const MAXZONE: i32 = 30;
    /// Easting of the central meridian, before the zone prefix
    pub const EASTING: f64 = 500_000.;
    /// Zone number multiplier prefixed to the easting
    pub const PREFIX: f64 = 1_000_000.;
    pub const NORTHING: f64 = 0.;
}

// Size of the 100 km grid square used by the grid reference.
const TILE: i64 = 100_000;

/// Parameters of one 6° Gauss-Krüger zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionZone {
    number: i32,
    scale_factor: f64,
    central_meridian: f64,
    false_northing: f64,
    false_easting: f64,
}

impl ProjectionZone {
    /// Zone parameters for a zone number. The number is not range checked.
    ///
    /// ```
    /// use sk42convert::gauss_kruger::ProjectionZone;
    ///
    /// let zone = ProjectionZone::from_number(7);
    ///
    /// assert_eq!(zone.central_meridian_degrees(), 39.0);
    /// assert_eq!(zone.false_easting(), 7_500_000.0);
    /// ```
    pub fn from_number(number: i32) -> ProjectionZone {
        Self {
            number,
            scale_factor: GK_K0,
            central_meridian: central_meridian(number).to_radians(),
            false_northing: zonespec::NORTHING,
            false_easting: f64::from(number) * zonespec::PREFIX + zonespec::EASTING,
        }
    }

    /// Zone parameters for the zone containing `lon` (degrees, SK42).
    pub fn from_longitude(lon: f64) -> ProjectionZone {
        ProjectionZone::from_number(zone_number(lon))
    }

    #[inline]
    pub fn number(&self) -> i32 {
        self.number
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Central meridian in radians.
    #[inline]
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    pub fn central_meridian_degrees(&self) -> f64 {
        central_meridian(self.number)
    }

    #[inline]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    #[inline]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }
}

/// Zone number of an SK42 longitude in degrees: `floor(lon / 6) + 1`.
///
/// A longitude on a zone edge belongs to the zone east of it. Longitudes too
/// large for an `i32` zone saturate instead of overflowing.
///
/// ```
/// use sk42convert::gauss_kruger::zone_number;
///
/// assert_eq!(zone_number(37.6), 7);
/// assert_eq!(zone_number(36.0), 7);
/// assert_eq!(zone_number(-0.5), 0);
/// assert_eq!(zone_number(-180.0), -29);
/// assert_eq!(zone_number(1e12), i32::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn zone_number(lon: f64) -> i32 {
    ((lon / f64::from(zonespec::WIDTH)).floor() as i32).saturating_add(1)
}

pub(crate) fn central_meridian(zone: i32) -> f64 {
    let width = f64::from(zonespec::WIDTH);
    f64::from(zone) * width - width / 2.
}

/// SK42 Gauss-Krüger rectangular coordinate. The easting carries the zone
/// number as its millions prefix.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussKruger {
    pub(crate) zone: i32,
    pub(crate) northing: f64,
    pub(crate) easting: f64,
}

impl GaussKruger {
    pub(crate) fn new(zone: i32, northing: f64, easting: f64) -> GaussKruger {
        Self {
            zone,
            northing,
            easting,
        }
    }

    /// Tries to create a Gauss-Krüger coordinate. The zone must be in
    /// `[-29, 30]` and both values must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangular`] if the zone or either value is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use sk42convert::GaussKruger;
    ///
    /// assert!(GaussKruger::create(7, 6_182_336.0, 7_413_314.0).is_ok());
    /// assert!(GaussKruger::create(31, 6_182_336.0, 7_413_314.0).is_err());
    /// assert!(GaussKruger::create(7, f64::NAN, 7_413_314.0).is_err());
    /// ```
    pub fn create(zone: i32, northing: f64, easting: f64) -> Result<GaussKruger, Error> {
        if !(zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone) {
            return Err(Error::InvalidRectangular(
                format!("Zone {zone} not in range [{}, {}]", zonespec::MINZONE, zonespec::MAXZONE)
            ));
        }

        if !northing.is_finite() || !easting.is_finite() {
            return Err(Error::InvalidRectangular(
                format!("Northing {northing} and easting {easting} must be finite")
            ));
        }

        Ok(GaussKruger::new(zone, northing, easting))
    }

    #[inline]
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Northing in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Easting in meters, including the zone prefix.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Easting with the zone prefix removed, so the central meridian is at
    /// 500 km.
    ///
    /// ```
    /// use sk42convert::GaussKruger;
    ///
    /// let coord = GaussKruger::create(7, 6_182_336.0, 7_413_314.0).unwrap();
    /// assert_eq!(coord.easting_in_zone(), 413_314.0);
    /// ```
    pub fn easting_in_zone(&self) -> f64 {
        self.easting - f64::from(self.zone) * zonespec::PREFIX
    }

    pub fn projection_zone(&self) -> ProjectionZone {
        ProjectionZone::from_number(self.zone)
    }

    /// Projects an SK42 latitude/longitude (degrees). No range checking is
    /// done; accuracy degrades away from the central meridian and the poles
    /// are singular.
    pub fn from_sk42(lat: f64, lon: f64) -> GaussKruger {
        let zone = ProjectionZone::from_longitude(lon);
        let (x, y) = SK42.from_latlon(zone.central_meridian(), lat, lon);

        if !(zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone.number()) {
            log::debug!("longitude {lon} gives zone {} outside [-29, 30]", zone.number());
        }
        log::trace!("zone {} projection of ({lat}, {lon}): x={x} y={y}", zone.number());

        GaussKruger {
            zone: zone.number(),
            northing: y + zone.false_northing(),
            easting: x + zone.false_easting(),
        }
    }

    /// Projects a geographic position, first shifting it to SK42 if it is in
    /// another datum.
    ///
    /// # Usage
    ///
    /// ```
    /// use sk42convert::{GaussKruger, GeographicPosition};
    ///
    /// let moscow = GeographicPosition::wgs84(55.755826, 37.617300, 0.0);
    /// let coord = GaussKruger::from_latlon(&moscow);
    ///
    /// assert_eq!(coord.zone(), 7);
    /// assert!((coord.northing() - 6_182_335.93).abs() < 1.0);
    /// assert!((coord.easting() - 7_413_314.27).abs() < 1.0);
    /// ```
    pub fn from_latlon(value: &GeographicPosition) -> GaussKruger {
        match value.datum() {
            Datum::Sk42 => GaussKruger::from_sk42(value.latitude(), value.longitude()),
            Datum::Wgs84 => {
                let (lat, lon, _) = WGS84_TO_SK42.shift(value.latitude(), value.longitude(), value.height());
                GaussKruger::from_sk42(lat, lon)
            }
        }
    }

    /// Splits the rounded northing and in-zone easting into hundreds of
    /// kilometers and the five-digit remainder, the way they are read off an
    /// SK42 map grid.
    ///
    /// ```
    /// use sk42convert::GaussKruger;
    ///
    /// let coord = GaussKruger::create(7, 6_182_335.93, 7_413_314.27).unwrap();
    /// assert_eq!(coord.grid_reference(), "7 X: 61 82336 Y: 4 13314");
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn grid_reference(&self) -> String {
        let northing = self.northing.round() as i64;
        let easting = self.easting_in_zone().round() as i64;

        format!(
            "{} X: {} {:05} Y: {} {:05}",
            self.zone,
            northing.div_euclid(TILE),
            northing.rem_euclid(TILE),
            easting.div_euclid(TILE),
            easting.rem_euclid(TILE),
        )
    }
}

impl Display for GaussKruger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "{} {northing} {easting}",
            self.zone,
        )
    }
}

/// Projects SK42 latitude/longitude (degrees) to Gauss-Krüger northing and
/// easting in meters. The zone is implied by the easting's millions prefix.
///
/// ```
/// use sk42convert::gauss_kruger::project;
///
/// let (northing, easting) = project(0.0, 3.0);
///
/// assert_eq!(northing, 0.0);
/// assert_eq!(easting, 1_500_000.0);
/// ```
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let coord = GaussKruger::from_sk42(lat, lon);
    (coord.northing, coord.easting)
}

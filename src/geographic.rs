use std::fmt::Display;

use crate::{
    datum::WGS84_TO_SK42,
    ellipsoid::{Ellipsoid, KRASOVSKY_1940, WGS84},
    gauss_kruger::GaussKruger,
    utility::{dms, GeoMath},
    Error, ParseCoord, ThisOrThat,
};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Geodetic datum a [`GeographicPosition`] is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum {
    Wgs84,
    Sk42,
}

impl Datum {
    pub fn ellipsoid(&self) -> Ellipsoid {
        match self {
            Datum::Wgs84 => WGS84,
            Datum::Sk42 => KRASOVSKY_1940,
        }
    }
}

/// Latitude/longitude in degrees and ellipsoidal height in meters in a named
/// [`Datum`]. Can be shifted between WGS84 and SK42 and projected to
/// [`GaussKruger`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicPosition {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) height: f64,
    pub(crate) datum: Datum,
}

impl GeographicPosition {
    /// Creates a position without checking any bounds. Out of range values
    /// give numerically defined but meaningless results downstream.
    pub fn new(lat: f64, lon: f64, height: f64, datum: Datum) -> GeographicPosition {
        Self {
            latitude: lat,
            longitude: lon,
            height,
            datum,
        }
    }

    /// Unchecked WGS84 position.
    pub fn wgs84(lat: f64, lon: f64, height: f64) -> GeographicPosition {
        GeographicPosition::new(lat, lon, height, Datum::Wgs84)
    }

    /// Unchecked SK42 position.
    pub fn sk42(lat: f64, lon: f64, height: f64) -> GeographicPosition {
        GeographicPosition::new(lat, lon, height, Datum::Sk42)
    }

    /// Tries to create a position, first checking that:
    /// * Latitude is in range (-90, 90)
    /// * Longitude is in range [-180, 180]
    /// * Height is finite
    ///
    /// # Errors
    ///
    /// Returns [`Error::PolarSingularity`] for latitude ±90, where the datum
    /// shift and the projection divide by `cos(lat)`, and
    /// [`Error::InvalidCoord`] for anything else out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use sk42convert::{Datum, Error, GeographicPosition};
    ///
    /// let coord = GeographicPosition::create(55.755826, 37.617300, 0.0, Datum::Wgs84);
    /// assert!(coord.is_ok());
    ///
    /// let invalid_lat = GeographicPosition::create(100.0, 0.0, 0.0, Datum::Wgs84);
    /// assert!(matches!(invalid_lat, Err(Error::InvalidCoord(_))));
    ///
    /// let pole = GeographicPosition::create(-90.0, 0.0, 0.0, Datum::Wgs84);
    /// assert!(matches!(pole, Err(Error::PolarSingularity(_))));
    /// ```
    pub fn create(lat: f64, lon: f64, height: f64, datum: Datum) -> Result<GeographicPosition, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if lat.abs() == qd {
            Err(Error::PolarSingularity(lat))
        } else if !(-qd..=qd).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-hd..=hd).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else if !height.is_finite() {
            Err(Error::InvalidCoord(format!("Height {height} is not finite.")))
        } else {
            Ok(GeographicPosition::new(lat, lon, height, datum))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Ellipsoidal height in meters.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Returns the distance in meters between two points using the
    /// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
    /// on a sphere of the Earth's mean radius. Datums are ignored.
    pub fn haversine(&self, other: &GeographicPosition) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts to the SK42 datum. Positions already in SK42 are returned as is.
    ///
    /// # Usage
    ///
    /// ```
    /// use sk42convert::{Datum, GeographicPosition};
    ///
    /// let moscow = GeographicPosition::wgs84(55.755826, 37.617300, 0.0).to_sk42();
    ///
    /// assert_eq!(moscow.datum(), Datum::Sk42);
    /// assert!((moscow.latitude() - 55.755713).abs() < 1e-6);
    /// assert!((moscow.longitude() - 37.619315).abs() < 1e-6);
    /// ```
    pub fn to_sk42(&self) -> GeographicPosition {
        match self.datum {
            Datum::Sk42 => *self,
            Datum::Wgs84 => {
                let (lat, lon, height) = WGS84_TO_SK42.shift(self.latitude, self.longitude, self.height);
                GeographicPosition::sk42(lat, lon, height)
            }
        }
    }

    /// Converts to the WGS84 datum. Positions already in WGS84 are returned as is.
    pub fn to_wgs84(&self) -> GeographicPosition {
        match self.datum {
            Datum::Wgs84 => *self,
            Datum::Sk42 => {
                let (lat, lon, height) = WGS84_TO_SK42.unshift(self.latitude, self.longitude, self.height);
                GeographicPosition::wgs84(lat, lon, height)
            }
        }
    }

    /// Converts to [`GaussKruger`], shifting to SK42 first if needed.
    pub fn to_gauss_kruger(&self) -> GaussKruger {
        GaussKruger::from_latlon(self)
    }

    /// Formats latitude and longitude as degrees, minutes and seconds with a
    /// hemisphere letter.
    ///
    /// ```
    /// use sk42convert::GeographicPosition;
    ///
    /// let coord = GeographicPosition::wgs84(-33.9, 18.4, 0.0);
    /// let (lat, lon) = coord.to_dms();
    ///
    /// assert_eq!(lat, "33° 54' 0.00\" S");
    /// assert_eq!(lon, "18° 24' 0.00\" E");
    /// ```
    pub fn to_dms(&self) -> (String, String) {
        let angle = |value: f64, positive: char, negative: char| {
            let (degrees, minutes, seconds) = value.split_dms();
            // Values that round to zero take the positive hemisphere
            let zero = degrees == 0 && minutes == 0 && seconds == 0.;
            format!(
                "{degrees}° {minutes}' {seconds:.2}\" {}",
                (value < 0. && !zero).ternary(negative, positive),
            )
        };

        (angle(self.latitude, 'N', 'S'), angle(self.longitude, 'E', 'W'))
    }
}

impl ParseCoord for GeographicPosition {
    /// Parses `"lat lon [height]"` in WGS84. Values may be separated by
    /// whitespace, commas, or both. Height defaults to 0.
    fn parse_coord(value: &str) -> Result<GeographicPosition, Error> {
        let pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidCoord(format!("Value {piece} is not a number.")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match pieces[..] {
            [lat, lon] => GeographicPosition::create(lat, lon, 0., Datum::Wgs84),
            [lat, lon, height] => GeographicPosition::create(lat, lon, height, Datum::Wgs84),
            _ => Err(Error::InvalidCoord(
                format!("Expected \"lat lon [height]\", found {} values in {value:?}.", pieces.len())
            )),
        }
    }
}

impl Display for GeographicPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let height = buf.format(self.height);
        write!(
            f,
            "{lat} {lon} {height}",
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn create_bounds() {
        assert!(GeographicPosition::create(89.999, 180., 0., Datum::Sk42).is_ok());
        assert!(GeographicPosition::create(0., -180., -400., Datum::Wgs84).is_ok());
        assert!(matches!(
            GeographicPosition::create(0., 180.5, 0., Datum::Wgs84),
            Err(Error::InvalidCoord(_))
        ));
        assert!(matches!(
            GeographicPosition::create(90., 10., 0., Datum::Wgs84),
            Err(Error::PolarSingularity(lat)) if lat == 90.
        ));
        assert!(GeographicPosition::create(f64::NAN, 0., 0., Datum::Wgs84).is_err());
        assert!(GeographicPosition::create(0., 0., f64::INFINITY, Datum::Wgs84).is_err());
    }

    #[test]
    fn shift_carries_height() {
        let coord = GeographicPosition::wgs84(55.755826, 37.6173, 150.).to_sk42();
        assert_abs_diff_eq!(coord.height(), 144.890_609, epsilon = 1e-5);
    }

    #[test]
    fn same_datum_is_untouched() {
        let coord = GeographicPosition::sk42(55.7, 37.6, 10.);
        assert_eq!(coord.to_sk42(), coord);

        let coord = GeographicPosition::wgs84(55.7, 37.6, 10.);
        assert_eq!(coord.to_wgs84(), coord);
    }

    #[test]
    fn sk42_back_to_wgs84() {
        let wgs = GeographicPosition::wgs84(55.755826, 37.6173, 0.);
        let back = wgs.to_sk42().to_wgs84();

        assert_eq!(back.datum(), Datum::Wgs84);
        // Corrections are evaluated at the shifted point, so the round trip is
        // not exact
        assert!(back.haversine(&wgs) < 0.01);
    }

    #[test]
    fn parse() {
        let coord: GeographicPosition = crate::from_str("55.755826, 37.6173").unwrap();
        assert_abs_diff_eq!(coord.latitude(), 55.755826);
        assert_abs_diff_eq!(coord.longitude(), 37.6173);
        assert_abs_diff_eq!(coord.height(), 0.);
        assert_eq!(coord.datum(), Datum::Wgs84);

        let coord: GeographicPosition = crate::from_str("  -33.9 18.4  120.5 ").unwrap();
        assert_abs_diff_eq!(coord.height(), 120.5);

        assert!(crate::from_str::<_, GeographicPosition>("55.7").is_err());
        assert!(crate::from_str::<_, GeographicPosition>("55.7 north").is_err());
        assert!(crate::from_str::<_, GeographicPosition>("95 37").is_err());
        assert!(crate::from_str::<_, GeographicPosition>("1 2 3 4").is_err());
    }

    #[test]
    fn dms_north_east() {
        let (lat, lon) = GeographicPosition::wgs84(55.755826, 37.6173, 0.).to_dms();
        assert_eq!(lat, "55° 45' 20.97\" N");
        assert_eq!(lon, "37° 37' 2.28\" E");
    }

    #[test]
    fn dms_rounded_zero_is_north_east() {
        let (lat, lon) = GeographicPosition::wgs84(-0.0, -1e-9, 0.).to_dms();
        assert_eq!(lat, "0° 0' 0.00\" N");
        assert_eq!(lon, "0° 0' 0.00\" E");

        let (lat, lon) = GeographicPosition::wgs84(-0.000_01, -0.5, 0.).to_dms();
        assert_eq!(lat, "0° 0' 0.04\" S");
        assert_eq!(lon, "0° 30' 0.00\" W");
    }

    #[test]
    fn datum_ellipsoids() {
        assert_eq!(Datum::Wgs84.ellipsoid(), WGS84);
        assert_eq!(Datum::Sk42.ellipsoid(), KRASOVSKY_1940);
    }

    #[test]
    fn display() {
        let coord = GeographicPosition::wgs84(55.5, -37.25, 0.);
        assert_eq!(coord.to_string(), "55.5 -37.25 0.0");
    }
}

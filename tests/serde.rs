#![cfg(feature = "serde")]

use sk42convert::{Datum, GaussKruger, GeographicPosition};

#[test]
fn position_accepts_short_names() {
    let coord: GeographicPosition =
        serde_json::from_str(r#"{"lat": 55.755826, "lon": 37.6173, "datum": "Wgs84"}"#).unwrap();

    assert_eq!(coord.latitude(), 55.755826);
    assert_eq!(coord.longitude(), 37.6173);
    assert_eq!(coord.height(), 0.);
    assert_eq!(coord.datum(), Datum::Wgs84);
}

#[test]
fn gauss_kruger_serializes_zone() {
    let coord = GaussKruger::create(7, 6_182_336.0, 7_413_314.0).unwrap();
    let json = serde_json::to_value(coord).unwrap();

    assert_eq!(json["zone"], 7);
    assert_eq!(json["northing"], 6_182_336.0);
    assert_eq!(json["easting"], 7_413_314.0);
}

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geojson::{Geometry, Value};
use shared::Coordinate;
use tracklog::{
    Journey,
    distance::track_distance_km,
    filter::pin_positions,
    geometry::route_geometry,
    gpx_export::{track_gpx_base64, track_gpx_data_url},
};

const SAMPLE_TRACK: &str = include_str!("../data/sample_track.json");

fn sample_journey() -> Journey {
    Journey::from_json_str(SAMPLE_TRACK).expect("sample track")
}

#[test]
fn loaded_track_derives_pins_and_geometry() {
    let journey = sample_journey();
    assert_eq!(journey.driver().name, "Nadia Cherif");
    assert_eq!(journey.positions().len(), 8);
    assert_eq!(journey.start().timestamp, "2023-06-14T14:31:05Z");
    assert_eq!(journey.end().timestamp, "2023-06-14T14:34:51Z");

    // Two samples per minute over minutes 31-34: one pin per minute change,
    // behind the sentinel.
    let pins = pin_positions(journey.positions());
    assert_eq!(pins[0], Coordinate::sentinel());
    assert_eq!(pins.len(), 5);

    // The line keeps every sample even though the pins collapse them.
    let collection = route_geometry(journey.driver(), journey.positions());
    let points = match &collection.features[0].geometry {
        Some(Geometry {
            value: Value::LineString(points),
            ..
        }) => points.clone(),
        other => panic!("expected a LineString geometry, got {other:?}"),
    };
    assert_eq!(points.len(), journey.positions().len());
    assert_eq!(
        points[0],
        vec![journey.start().longitude, journey.start().latitude]
    );

    let distance = track_distance_km(journey.positions());
    assert!(distance > 0.3 && distance < 2.0, "distance was {distance}");
}

#[test]
fn loads_the_same_track_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_track.json");
    let journey = Journey::from_file(path).expect("sample track file");
    assert_eq!(journey.positions().len(), 8);
}

#[test]
fn loaded_track_exports_as_a_gpx_download() {
    let journey = sample_journey();

    let encoded = track_gpx_base64(&journey).expect("gpx");
    let document = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
    assert_eq!(document.matches("<trkpt").count(), journey.positions().len());
    assert!(document.contains("Nadia Cherif"));
    assert!(document.contains("2023-06-14T14:31:05"));

    let url = track_gpx_data_url(&journey).expect("gpx url");
    assert!(url.starts_with("data:application/gpx+xml;base64,"));
}

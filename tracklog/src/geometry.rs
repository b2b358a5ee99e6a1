use geo_types::LineString;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use shared::{Coordinate, Driver};

/// Build the GeoJSON backing the route layer: a single LineString feature
/// with one `[longitude, latitude]` position per recorded sample, in
/// recorded order. No simplification, no deduplication; the line mirrors the
/// log exactly, and an empty log yields a zero-point line. The driver record
/// rides along as a foreign member of the collection for downstream styling
/// or inspection.
pub fn route_geometry(driver: &Driver, positions: &[Coordinate]) -> FeatureCollection {
    let line = LineString::from(
        positions
            .iter()
            .map(|position| (position.longitude, position.latitude))
            .collect::<Vec<_>>(),
    );

    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&line))),
        id: None,
        properties: None,
        foreign_members: None,
    };

    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: Some(driver_sidecar(driver)),
    }
}

fn driver_sidecar(driver: &Driver) -> JsonObject {
    let mut members = JsonObject::new();
    members.insert("driver".into(), json!(driver));
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Phone;

    fn driver_fixture() -> Driver {
        Driver {
            id: "d1".into(),
            name: "Alice".into(),
            phone: Phone {
                national_number: "5551234".into(),
                country_calling_code: "1".into(),
            },
            os: "iOS".into(),
            version: "17".into(),
        }
    }

    fn at(longitude: f64, latitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
            timestamp: "2023-01-01T10:00:00Z".into(),
        }
    }

    fn line_points(collection: &FeatureCollection) -> Vec<Vec<f64>> {
        match &collection.features[0].geometry {
            Some(Geometry {
                value: Value::LineString(points),
                ..
            }) => points.clone(),
            other => panic!("expected a LineString geometry, got {other:?}"),
        }
    }

    #[test]
    fn one_position_per_sample_in_order() {
        let positions = [at(4.57, 45.93), at(4.58, 45.94), at(4.58, 45.94)];
        let collection = route_geometry(&driver_fixture(), &positions);

        assert_eq!(collection.features.len(), 1);
        assert_eq!(line_points(&collection).len(), positions.len());
    }

    #[test]
    fn positions_are_longitude_first() {
        let positions = [at(0.0, 0.0), at(1.0, 1.0)];
        let collection = route_geometry(&driver_fixture(), &positions);

        assert_eq!(
            line_points(&collection),
            vec![vec![0.0, 0.0], vec![1.0, 1.0]]
        );
    }

    #[test]
    fn empty_log_yields_a_zero_point_line() {
        let collection = route_geometry(&driver_fixture(), &[]);
        assert!(line_points(&collection).is_empty());
    }

    #[test]
    fn driver_rides_along_as_a_foreign_member() {
        let collection = route_geometry(&driver_fixture(), &[at(4.57, 45.93)]);
        let members = collection.foreign_members.as_ref().unwrap();
        assert_eq!(members["driver"]["name"], "Alice");
        assert_eq!(members["driver"]["phone"]["nationalNumber"], "5551234");
    }
}

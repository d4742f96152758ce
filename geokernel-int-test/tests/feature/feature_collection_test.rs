use geokernel::{BoundingBox, Feature, FeatureCollection, GeometryCollection, Point};
use geokernel_int_test::test_util::{sequential_factory, square};
use serde_json::json;

fn world() -> FeatureCollection {
    FeatureCollection::with_features(vec![
        Feature::new(square(0.0, 0.0, 10.0, 10.0)).with_id("origin"),
        Feature::new(square(175.0, -5.0, 179.0, 5.0)).with_id("fiji"),
        Feature::new(Point::with_coordinates([-178.0, 0.0])).with_id("samoa"),
        Feature::new(GeometryCollection::with_geometries(vec![
            Point::with_coordinates([100.0, 60.0]).into(),
            Point::with_coordinates([5.0, 5.0]).into(),
        ]))
        .with_id("scattered"),
        Feature::default().with_id("nowhere"),
    ])
}

fn ids(features: Vec<&Feature>) -> Vec<&str> {
    features.into_iter().filter_map(Feature::id).collect()
}

#[test]
fn test_features_in_box() {
    let features = world();
    let found = features.features_in(&BoundingBox::new(-1.0, -1.0, 6.0, 6.0));
    assert_eq!(ids(found), vec!["origin", "scattered"]);
}

#[test]
fn test_features_in_wrapping_box() {
    let features = world();
    let found = features.features_in(&BoundingBox::new(170.0, -10.0, -170.0, 10.0));
    assert_eq!(ids(found), vec!["fiji", "samoa"]);
}

#[test]
fn test_features_in_empty_box() {
    let features = world();
    assert!(features.features_in(&BoundingBox::empty()).is_empty());
}

#[test]
fn test_collection_bounds_skip_empty_features() {
    let features = FeatureCollection::with_features(vec![
        Feature::new(square(0.0, 0.0, 1.0, 1.0)),
        Feature::default(),
        Feature::new(Point::with_coordinates([5.0, -2.0])),
    ]);
    assert_eq!(features.bounds().bbox(), [0.0, -2.0, 5.0, 1.0]);
}

#[test]
fn test_feature_collection_geojson() {
    let factory = sequential_factory();
    let value = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 7,
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"name": "marker"}
            },
            {"type": "Feature", "geometry": null, "properties": null}
        ]
    });

    let features = FeatureCollection::from_geojson(&value, &factory).unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features.features()[0].id(), Some("7"));
    assert_eq!(features.features()[0].properties()["name"], "marker");
    assert_eq!(features.features()[0].geometry().unwrap().identifier(), "G1");
    assert!(features.features()[1].geometry().is_none());

    let written = features.to_geojson();
    assert_eq!(written["features"][0]["id"], "7");
    assert_eq!(written["features"][0]["geometry"]["bbox"], json!([1.0, 2.0, 1.0, 2.0]));
    assert!(written["features"][1]["geometry"].is_null());
}

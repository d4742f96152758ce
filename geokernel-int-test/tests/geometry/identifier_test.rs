use geokernel::{Geometry, GeometryCollection, Point, Polygon};
use geokernel_int_test::test_util::{rectangle, sequential_factory};
use std::collections::HashSet;

#[test]
fn test_shared_factory_identifiers_are_unique() {
    let identifiers: HashSet<String> = (0..1000)
        .map(|i| Point::with_coordinates([i as f64, 0.0]).identifier().to_string())
        .collect();
    assert_eq!(identifiers.len(), 1000);
    for identifier in &identifiers {
        assert!(identifier.starts_with('G'));
        assert_eq!(identifier.len(), 33);
    }
}

#[test]
fn test_injected_factory_is_deterministic() {
    let factory = sequential_factory();
    let point = factory.point([1.0, 1.0]);
    let polygon = factory.polygon(vec![rectangle(0.0, 0.0, 1.0, 1.0)]);
    let collection = factory.collection(vec![point.into(), polygon.into()]);

    assert_eq!(collection.geometries()[0].identifier(), "G1");
    assert_eq!(collection.geometries()[1].identifier(), "G2");
    assert_eq!(collection.identifier(), "G3");
}

#[test]
fn test_clone_keeps_identifier_and_copy_renews_it() {
    let factory = sequential_factory();
    let original: Geometry = factory
        .collection(vec![
            factory.point([0.0, 0.0]).into(),
            factory.polygon(vec![rectangle(0.0, 0.0, 2.0, 2.0)]).into(),
        ])
        .into();

    let cloned = original.clone();
    assert_eq!(cloned, original);

    let copied = factory.copy(&original);
    assert_eq!(copied.identifier(), "G4");
    let Geometry::Collection(members) = &copied else {
        panic!("copy must keep the variant");
    };
    let identifiers: Vec<&str> = members.geometries().iter().map(Geometry::identifier).collect();
    assert_eq!(identifiers, vec!["G5", "G6"]);
    assert_eq!(copied.bbox(), original.bbox());
}

#[test]
fn test_identifiers_survive_serialization() {
    let polygon = Polygon::with_coordinates(vec![rectangle(0.0, 0.0, 1.0, 1.0)]);
    let collection = GeometryCollection::with_geometries(vec![polygon.clone().into()]);
    let geometry = Geometry::from(collection);

    let json = serde_json::to_string(&geometry).unwrap();
    let restored: Geometry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, geometry);
    assert_eq!(restored.identifier(), geometry.identifier());
}

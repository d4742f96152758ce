use geokernel::{Criteria, Feature, FeatureDelegate, GeoError, Layer, Point};
use geokernel_int_test::test_util::{square, MemoryFeatureService, BBOX_PARAMETER};
use std::sync::Arc;

fn service() -> Arc<MemoryFeatureService> {
    Arc::new(
        MemoryFeatureService::new()
            .with_layer(
                "cities",
                vec![
                    Feature::new(Point::with_coordinates([2.35, 48.86])).with_id("paris"),
                    Feature::new(Point::with_coordinates([178.44, -18.14])).with_id("suva"),
                    Feature::new(Point::with_coordinates([-171.76, -13.83])).with_id("apia"),
                ],
            )
            .with_layer(
                "parks",
                vec![Feature::new(square(0.0, 0.0, 1.0, 1.0)).with_id("square")],
            ),
    )
}

#[test]
fn test_fetch_without_service_is_empty() {
    let delegate = FeatureDelegate::new();
    let features = delegate
        .fetch_features_with_criteria_and_layer(&Criteria::new("population > 0"), &Layer::new("cities"))
        .unwrap();
    assert!(features.is_empty());
}

#[test]
fn test_fetch_with_bbox_across_antimeridian() {
    let service = service();
    let delegate = FeatureDelegate::with_service(service.clone());
    let criteria = Criteria::new("within($bbox)")
        .with_parameter(BBOX_PARAMETER, vec![170.0, -30.0, -165.0, 0.0]);

    let features = delegate
        .fetch_features_with_criteria_and_layer(&criteria, &Layer::new("cities"))
        .unwrap();
    let ids: Vec<&str> = features.features().iter().filter_map(Feature::id).collect();
    assert_eq!(ids, vec!["suva", "apia"]);

    let queries = service.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].layer.name(), "cities");
    assert_eq!(queries[0].criteria.parameters()["layer"], "cities");
}

#[test]
fn test_fetch_whole_layer() {
    let delegate = FeatureDelegate::with_service(service());
    let features = delegate
        .fetch_features_with_criteria_and_layer(&Criteria::new("true"), &Layer::new("parks"))
        .unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features.bounds().bbox(), [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_fetch_rejects_blank_criteria() {
    let service = service();
    let delegate = FeatureDelegate::with_service(service.clone());
    let result = delegate.fetch_features_with_criteria_and_layer(&Criteria::new(""), &Layer::new("cities"));
    assert!(matches!(result, Err(GeoError::InvalidCriteria(_))));
    assert!(service.queries().is_empty());
}

#[test]
fn test_fetch_unknown_layer_fails() {
    let delegate = FeatureDelegate::with_service(service());
    let result =
        delegate.fetch_features_with_criteria_and_layer(&Criteria::new("true"), &Layer::new("rivers"));
    assert!(matches!(result, Err(GeoError::Service(_))));
}

#[test]
fn test_service_can_be_swapped() {
    let delegate = FeatureDelegate::with_service(service());
    delegate.set_service(None);
    let features = delegate
        .fetch_features_with_criteria_and_layer(&Criteria::new("true"), &Layer::new("parks"))
        .unwrap();
    assert!(features.is_empty());
}

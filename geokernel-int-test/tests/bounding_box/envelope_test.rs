use geokernel::{BoundingBox, Position};
use geokernel_int_test::test_util::{random_bounds, random_position, random_positions};
use rand::Rng;

#[test]
fn test_set_with_positions_contains_every_position() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let count = rng.random_range(1..64);
        let positions = random_positions(&mut rng, count);
        let mut bounds = BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        bounds.set_with_positions(&positions);
        for position in &positions {
            assert!(bounds.contains(position), "{} should contain {}", bounds, position);
        }
    }
}

#[test]
fn test_extend_is_idempotent_for_contained_positions() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let positions = random_positions(&mut rng, 16);
        let mut bounds = BoundingBox::with_positions(&positions);
        let before = bounds.clone();

        for position in &positions {
            bounds.extend(position);
        }
        assert_eq!(bounds, before);

        // Corners are inside too, boundary inclusive
        for corner in before.positions() {
            bounds.extend(&corner);
        }
        assert_eq!(bounds, before);
    }
}

#[test]
fn test_extend_grows_to_new_positions() {
    let mut rng = rand::rng();
    let mut bounds = BoundingBox::empty();
    let mut seen = Vec::new();
    for _ in 0..100 {
        let position = random_position(&mut rng);
        bounds.extend(&position);
        seen.push(position);
        assert_eq!(bounds, BoundingBox::with_positions(&seen));
    }
}

#[test]
fn test_intersects_is_symmetric() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let a = random_bounds(&mut rng);
        let b = random_bounds(&mut rng);
        assert_eq!(
            a.intersects(&b),
            b.intersects(&a),
            "intersects must be symmetric for {} and {}",
            a,
            b
        );
        assert!(a.intersects(&a));
    }
}

#[test]
fn test_equality_is_exact() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_bounds(&mut rng);
        let b = BoundingBox::from(a.bbox());
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);

        for field in 0..4 {
            let mut bbox = a.bbox();
            bbox[field] += 1e-9;
            assert_ne!(a, BoundingBox::from(bbox));
        }
    }
}

#[test]
fn test_with_coordinates_scenario() {
    let bounds = BoundingBox::with_coordinates(0.0, 0.0, 10.0, 10.0, None);
    assert!(bounds.contains(&Position::new(5.0, 5.0)));
    assert!(!bounds.contains(&Position::new(11.0, 5.0)));
}

#[test]
fn test_bbox_wire_format() {
    let bounds: BoundingBox = serde_json::from_str("[-10.5, -20, 30, 40.25]").unwrap();
    assert_eq!(bounds.bbox(), [-10.5, -20.0, 30.0, 40.25]);
    assert_eq!(serde_json::to_value(&bounds).unwrap(), serde_json::json!([-10.5, -20.0, 30.0, 40.25]));

    assert!(serde_json::from_str::<BoundingBox>("[1, 2, 3]").is_err());
}

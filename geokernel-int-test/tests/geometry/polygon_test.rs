use geokernel::{Geometry, LineString, Point, Polygon, Position};
use geokernel_int_test::test_util::{rectangle, square, square_with_hole};

#[test]
fn test_bbox_follows_vertex_edits() {
    let mut polygon = Polygon::with_coordinates(vec![vec![
        [0.0, 0.0],
        [0.0, 10.0],
        [10.0, 10.0],
        [10.0, 0.0],
        [0.0, 0.0],
    ]]);
    assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 10.0]);

    polygon.coordinates_mut()[0][1] = Position::new(0.0, 20.0);
    assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 20.0]);

    polygon.coordinates_mut()[0].insert(2, Position::new(5.0, 25.0));
    assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 25.0]);

    polygon.coordinates_mut()[0].remove(2);
    assert_eq!(polygon.bbox(), [0.0, 0.0, 10.0, 20.0]);

    polygon.set_coordinates(vec![rectangle(10.0, 10.0, 20.0, 20.0)]);
    assert_eq!(polygon.bbox(), [10.0, 10.0, 20.0, 20.0]);
}

#[test]
fn test_holes_do_not_change_bbox() {
    let polygon = square_with_hole([0.0, 0.0, 40.0, 40.0], [10.0, 10.0, 30.0, 30.0]);
    assert_eq!(polygon.bbox(), [0.0, 0.0, 40.0, 40.0]);
    assert_eq!(polygon.holes().len(), 1);
}

#[test]
fn test_polygon_inside_hole_does_not_intersect() {
    let holed = square_with_hole([0.0, 0.0, 40.0, 40.0], [10.0, 10.0, 30.0, 30.0]);
    let inner = square(15.0, 15.0, 25.0, 25.0);
    assert!(!holed.intersects(&inner));
    assert!(!inner.intersects(&holed));
}

#[test]
fn test_polygon_partially_over_hole_intersects() {
    let holed = square_with_hole([0.0, 0.0, 40.0, 40.0], [10.0, 10.0, 30.0, 30.0]);
    let straddling = square(5.0, 5.0, 15.0, 15.0);
    assert!(holed.intersects(&straddling));
    assert!(straddling.intersects(&holed));
}

#[test]
fn test_polygon_touching_hole_ring_intersects() {
    let holed = square_with_hole([0.0, 0.0, 40.0, 40.0], [10.0, 10.0, 30.0, 30.0]);
    let touching = square(10.0, 15.0, 20.0, 25.0);
    assert!(holed.intersects(&touching));
}

#[test]
fn test_overlapping_squares_intersect() {
    let a = square(0.0, 0.0, 10.0, 10.0);
    let b = square(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_nested_and_disjoint_squares() {
    let outer = square(0.0, 0.0, 10.0, 10.0);
    let inner = square(2.0, 2.0, 4.0, 4.0);
    let far = square(20.0, 20.0, 30.0, 30.0);
    let edge = square(10.0, 0.0, 20.0, 10.0);

    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
    assert!(!outer.intersects(&far));
    assert!(outer.intersects(&edge));
}

#[test]
fn test_geometry_intersection_matrix() {
    let holed: Geometry = square_with_hole([0.0, 0.0, 40.0, 40.0], [10.0, 10.0, 30.0, 30.0]).into();
    let in_hole: Geometry = Point::with_coordinates([20.0, 20.0]).into();
    let in_solid: Geometry = Point::with_coordinates([5.0, 5.0]).into();
    let crossing: Geometry = LineString::with_coordinates(vec![[-5.0, 20.0], [20.0, 20.0]]).into();
    let inside_hole_line: Geometry =
        LineString::with_coordinates(vec![[15.0, 15.0], [25.0, 25.0]]).into();

    assert!(!holed.intersects(&in_hole));
    assert!(holed.intersects(&in_solid));
    assert!(in_solid.intersects(&holed));
    assert!(holed.intersects(&crossing));
    assert!(crossing.intersects(&holed));
    assert!(!holed.intersects(&inside_hole_line));
}

fn scaled_polygon(ring: &[[f64; 2]], scale: f64) -> Polygon {
    Polygon::with_coordinates(vec![ring
        .iter()
        .map(|[x, y]| [x * scale, y * scale])
        .collect::<Vec<_>>()])
}

#[test]
fn test_intersection_is_scale_invariant() {
    let triangle = [[0.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
    let across_diagonal = [[0.9, 0.1], [1.0, 0.1], [1.0, 0.0], [0.9, 0.1]];
    let overlapping = [[0.5, 0.5], [1.5, 0.5], [1.5, 1.5], [0.5, 1.5], [0.5, 0.5]];

    // From building footprints around a metre across up to whole degrees
    for scale in [1e-5, 1e-3, 1e0] {
        let a = scaled_polygon(&triangle, scale);
        let b = scaled_polygon(&across_diagonal, scale);
        let c = scaled_polygon(&overlapping, scale);

        assert!(!a.intersects(&b), "disjoint triangles at scale {}", scale);
        assert!(!b.intersects(&a), "disjoint triangles at scale {}", scale);
        assert!(a.intersects(&c), "overlapping shapes at scale {}", scale);
        assert!(c.intersects(&a), "overlapping shapes at scale {}", scale);
    }
}

#[test]
fn test_point_just_off_short_line() {
    let s = 1e-5;
    let line: Geometry = LineString::with_coordinates(vec![[0.0, 0.0], [s, s]]).into();
    let off: Geometry = Point::with_coordinates([0.5 * s, 0.4 * s]).into();
    let on: Geometry = Point::with_coordinates([0.5 * s, 0.5 * s]).into();

    assert!(!line.intersects(&off));
    assert!(!off.intersects(&line));
    assert!(line.intersects(&on));
}

//! Ring and segment predicates shared by the geometry types.
//!
//! A ring is a closed sequence of positions (first equals last). An area is a
//! slice of rings: ring 0 is the outer boundary and the remaining rings are
//! holes. Boundary contact always counts as intersection.

use crate::position::Position;

/// Collinearity tolerance, relative to the lengths of the two segments.
const COLLINEAR_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn orientation(p: &Position, q: &Position, r: &Position) -> Orientation {
    let (dx1, dy1) = (q.longitude - p.longitude, q.latitude - p.latitude);
    let (dx2, dy2) = (r.longitude - q.longitude, r.latitude - q.latitude);
    let val = dy1 * dx2 - dx1 * dy2;
    let scale = dx1.hypot(dy1) * dx2.hypot(dy2);
    if val.abs() <= COLLINEAR_TOLERANCE * scale {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Checks if `q` lies within the extent of segment `pr`, assuming the three
/// points are collinear.
fn on_segment(p: &Position, q: &Position, r: &Position) -> bool {
    q.longitude <= p.longitude.max(r.longitude)
        && q.longitude >= p.longitude.min(r.longitude)
        && q.latitude <= p.latitude.max(r.latitude)
        && q.latitude >= p.latitude.min(r.latitude)
}

/// Checks if segments `p1p2` and `p3p4` cross or touch.
pub(crate) fn segments_intersect(
    p1: &Position,
    p2: &Position,
    p3: &Position,
    p4: &Position,
) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p3, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, p4, p2))
        || (o3 == Orientation::Collinear && on_segment(p3, p1, p4))
        || (o4 == Orientation::Collinear && on_segment(p3, p2, p4))
}

/// Checks if any segment of path `a` crosses or touches any segment of path `b`.
pub(crate) fn paths_touch(a: &[Position], b: &[Position]) -> bool {
    a.windows(2).any(|first| {
        b.windows(2)
            .any(|second| segments_intersect(&first[0], &first[1], &second[0], &second[1]))
    })
}

/// Checks if the position lies on one of the path's segments.
pub(crate) fn point_on_path(position: &Position, path: &[Position]) -> bool {
    if path.len() == 1 {
        return path[0] == *position;
    }
    path.windows(2).any(|segment| {
        orientation(&segment[0], &segment[1], position) == Orientation::Collinear
            && on_segment(&segment[0], position, &segment[1])
    })
}

/// Ray casting test for a position strictly inside a ring.
///
/// Positions exactly on the ring may return either value; callers that care
/// test [`point_on_path`] first.
pub(crate) fn point_in_ring(position: &Position, ring: &[Position]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let x = position.longitude;
    let y = position.latitude;
    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Checks if the position lies in the solid part of an area: inside or on the
/// outer ring and not strictly inside any hole.
pub(crate) fn point_in_area(position: &Position, rings: &[Vec<Position>]) -> bool {
    let Some((outer, holes)) = rings.split_first() else {
        return false;
    };
    if point_on_path(position, outer) {
        return true;
    }
    if !point_in_ring(position, outer) {
        return false;
    }
    holes
        .iter()
        .all(|hole| point_on_path(position, hole) || !point_in_ring(position, hole))
}

/// Checks if two areas share any point.
///
/// Any contact between a ring of one area and a ring of the other is an
/// intersection, which covers edge crossings as well as partial overlap with a
/// hole. Without ring contact every ring of one area lies entirely inside or
/// outside each ring of the other, so a single vertex decides containment.
pub(crate) fn areas_intersect(a: &[Vec<Position>], b: &[Vec<Position>]) -> bool {
    let rings_touch = a
        .iter()
        .any(|ring_a| b.iter().any(|ring_b| paths_touch(ring_a, ring_b)));
    if rings_touch {
        return true;
    }

    let a_in_b = a
        .first()
        .and_then(|outer| outer.first())
        .is_some_and(|vertex| point_in_area(vertex, b));
    let b_in_a = b
        .first()
        .and_then(|outer| outer.first())
        .is_some_and(|vertex| point_in_area(vertex, a));
    a_in_b || b_in_a
}

/// Checks if an open path shares any point with an area.
pub(crate) fn path_intersects_area(path: &[Position], rings: &[Vec<Position>]) -> bool {
    rings.iter().any(|ring| paths_touch(path, ring))
        || path.first().is_some_and(|vertex| point_in_area(vertex, rings))
}

/// Checks if two open paths share any point.
pub(crate) fn paths_intersect(a: &[Position], b: &[Position]) -> bool {
    match (a.len(), b.len()) {
        (0, _) | (_, 0) => false,
        (1, _) => point_on_path(&a[0], b),
        (_, 1) => point_on_path(&b[0], a),
        _ => paths_touch(a, b),
    }
}

use crate::collision::Edge;
use crate::math::{Segment, Vector2, EPSILON};

/// Sign of the turn p -> q -> r: 1 counter-clockwise, -1 clockwise, 0 collinear
#[inline]
fn orientation(p: Vector2, q: Vector2, r: Vector2) -> i8 {
    let turn = (q - p).cross(&(r - p));
    if turn.abs() < EPSILON {
        0
    } else if turn > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether `q`, known to be collinear with `p` and `r`, lies within their bounding box
#[inline]
fn on_segment(p: Vector2, q: Vector2, r: Vector2) -> bool {
    q.x <= p.x.max(r.x) + EPSILON
        && q.x >= p.x.min(r.x) - EPSILON
        && q.y <= p.y.max(r.y) + EPSILON
        && q.y >= p.y.min(r.y) - EPSILON
}

/// Intersection point of two segments, or `None` if they do not touch.
///
/// Touching at an endpoint counts as an intersection. For collinear
/// overlapping segments the first shared endpoint is returned.
pub fn segment_intersection(first: &Segment, second: &Segment) -> Option<Vector2> {
    let (p1, q1) = (first.start, first.end);
    let (p2, q2) = (second.start, second.end);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    let crosses = (o1 != o2 && o3 != o4)
        || (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2));
    if !crosses {
        return None;
    }

    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let denominator = d1.cross(&d2);
    if denominator.abs() < EPSILON {
        // Parallel: the segments share a collinear stretch
        return [p2, q2]
            .into_iter()
            .find(|&p| on_segment(p1, p, q1))
            .or_else(|| [p1, q1].into_iter().find(|&p| on_segment(p2, p, q2)));
    }

    let t = (p2 - p1).cross(&d2) / denominator;
    Some(first.point_at(t.clamp(0.0, 1.0)))
}

/// Number of edges crossed by a horizontal ray from `point` to x = `ray_limit`.
///
/// An edge only counts when its endpoints lie on opposite sides of the ray
/// (one strictly above, one at or below), so a ray through a shared vertex is
/// counted once and horizontal edges never count.
pub fn get_ray_casting_count(point: Vector2, edges: &[Edge], ray_limit: f32) -> usize {
    let ray = Segment::new(point, Vector2::new(ray_limit, point.y));

    edges
        .iter()
        .filter(|edge| (edge.segment.start.y > point.y) != (edge.segment.end.y > point.y))
        .filter(|edge| segment_intersection(&ray, &edge.segment).is_some())
        .count()
}

/// Parity test: an odd number of crossings means `point` is inside the edges
#[inline]
pub fn is_point_inside(point: Vector2, edges: &[Edge], ray_limit: f32) -> bool {
    get_ray_casting_count(point, edges, ray_limit) % 2 == 1
}

/// Finds the edge nearest to `point` by casting a ray toward each edge's midpoint.
///
/// Returns the index of the edge in `edges` together with the point where the
/// ray meets it. Degenerate edges are skipped.
pub fn get_closest_edge(point: Vector2, edges: &[Edge]) -> Option<(usize, Vector2)> {
    let mut closest: Option<(usize, Vector2, f32)> = None;

    for (index, edge) in edges.iter().enumerate() {
        if edge.segment.is_degenerate() {
            continue;
        }

        let midpoint = edge.segment.midpoint();
        let toward = midpoint - point;
        let hit = if toward.is_zero() {
            Some(midpoint)
        } else {
            // Overshoot the midpoint so the ray is sure to reach the edge
            let ray = Segment::new(point, point + toward * 2.0);
            segment_intersection(&ray, &edge.segment)
        };

        if let Some(hit) = hit {
            let distance = point.distance_squared(&hit);
            if closest.map_or(true, |(_, _, best)| distance < best) {
                closest = Some((index, hit, distance));
            }
        }
    }

    closest.map(|(index, hit, _)| (index, hit))
}

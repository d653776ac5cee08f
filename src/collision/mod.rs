mod ray_casting;
mod polygon_collision;

pub use self::ray_casting::{
    segment_intersection, get_ray_casting_count, is_point_inside, get_closest_edge,
};
pub use self::polygon_collision::{handle_polygon_collision, collide_polygons, PolygonContact};

use crate::math::Segment;

/// A boundary edge of a polygon: the segment of one stick plus the particle indices it joins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the first endpoint particle
    pub a: usize,

    /// Index of the second endpoint particle
    pub b: usize,

    /// Current geometry of the edge
    pub segment: Segment,
}

use crate::bodies::{Particle, Polygon};
use crate::collision::{get_closest_edge, is_point_inside};
use crate::math::Vector2;

/// A particle found inside another polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonContact {
    /// Index of the colliding particle in its own polygon
    pub particle: usize,

    /// Endpoints of the edge the particle was pushed out through, if one was found
    pub edge: Option<(usize, usize)>,

    /// Where the particle's ray met that edge
    pub point: Vector2,

    /// Whether a positional correction was applied
    pub resolved: bool,
}

/// Tests one particle against `other` and pushes it out if it is inside.
///
/// The particle is moved to the closest edge's intersection point plus
/// `push` along the direction it travelled to get there; the edge's two
/// endpoints move `push` the opposite way. Locked particles keep their
/// position. When the particle sits exactly on the intersection point there
/// is no direction to push along and the contact is reported unresolved.
pub fn handle_polygon_collision(
    particle: &mut Particle,
    particle_index: usize,
    other: &mut Polygon,
    push: f32,
    ray_limit: f32,
) -> Option<PolygonContact> {
    if !particle.is_collision_active() {
        return None;
    }

    let edges = other.edges();
    if !is_point_inside(particle.position, &edges, ray_limit) {
        return None;
    }

    let Some((edge_index, hit)) = get_closest_edge(particle.position, &edges) else {
        return Some(PolygonContact {
            particle: particle_index,
            edge: None,
            point: particle.position,
            resolved: false,
        });
    };
    let edge = edges[edge_index];

    let Some(direction) = (hit - particle.position).try_normalize() else {
        tracing::trace!(particle = particle_index, "particle sits on the edge, no push direction");
        return Some(PolygonContact {
            particle: particle_index,
            edge: Some((edge.a, edge.b)),
            point: hit,
            resolved: false,
        });
    };

    let offset = direction * push;
    if !particle.is_locked() {
        particle.position = hit + offset;
    }

    let endpoints = other.particles_mut();
    endpoints[edge.a].displace(-offset);
    if edge.b != edge.a {
        endpoints[edge.b].displace(-offset);
    }

    Some(PolygonContact {
        particle: particle_index,
        edge: Some((edge.a, edge.b)),
        point: hit,
        resolved: true,
    })
}

/// Resolves every particle of `polygon` against `other`, returning the contacts found
pub fn collide_polygons(polygon: &mut Polygon, other: &mut Polygon, push: f32, ray_limit: f32) -> Vec<PolygonContact> {
    polygon
        .particles_mut()
        .iter_mut()
        .enumerate()
        .filter_map(|(index, particle)| handle_polygon_collision(particle, index, other, push, ray_limit))
        .collect()
}

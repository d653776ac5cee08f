use crate::bodies::{Particle, Polygon};
use crate::math::{Rect, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Edge of a platform a particle was snapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// A static axis-aligned platform.
///
/// Collision only looks at four thin zones running along the inside of each
/// edge. Zones are tested top, bottom, left, right and the first match wins;
/// a fast particle entering near a corner may therefore resolve to either
/// adjacent edge depending on where it lands that tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Platform {
    /// Top-left corner
    position: Vector2,
    width: i32,
    height: i32,
}

impl Platform {
    pub fn new(position: Vector2, width: i32, height: i32) -> Self {
        Self {
            position,
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_position_size(self.position, self.width as f32, self.height as f32)
    }

    /// Snaps a single particle out of the edge zone it is in, if any.
    ///
    /// Landing in the top zone also marks the particle as touching the ground.
    pub fn handle_particle_collision(&self, particle: &mut Particle, hitbox: f32) -> Option<PlatformSide> {
        let rect = self.rect();
        let p = particle.position;
        if particle.is_locked() || !rect.contains_point(p) {
            return None;
        }

        if p.y < rect.min.y + hitbox {
            particle.position.y = rect.min.y;
            particle.set_in_ground(true);
            Some(PlatformSide::Top)
        } else if p.y > rect.max.y - hitbox {
            particle.position.y = rect.max.y;
            Some(PlatformSide::Bottom)
        } else if p.x < rect.min.x + hitbox {
            particle.position.x = rect.min.x;
            Some(PlatformSide::Left)
        } else if p.x > rect.max.x - hitbox {
            particle.position.x = rect.max.x;
            Some(PlatformSide::Right)
        } else {
            None
        }
    }

    /// Resolves every particle of `polygon` against the platform and returns how many were snapped
    pub fn handle_polygon_collision(&self, polygon: &mut Polygon, hitbox: f32) -> usize {
        polygon
            .particles_mut()
            .iter_mut()
            .filter_map(|particle| self.handle_particle_collision(particle, hitbox))
            .count()
    }
}

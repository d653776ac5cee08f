use crate::bodies::{OwnerTag, Particle, Stick};
use crate::collision::Edge;
use crate::core::{Canvas, IntegrationParams};
use crate::math::{Rect, Segment, Vector2, EPSILON};

/// Index of the top-left corner of a rectangular body
pub const TOP_LEFT: usize = 0;
/// Index of the top-right corner of a rectangular body
pub const TOP_RIGHT: usize = 1;
/// Index of the bottom-right corner of a rectangular body
pub const BOTTOM_RIGHT: usize = 2;
/// Index of the bottom-left corner of a rectangular body
pub const BOTTOM_LEFT: usize = 3;

/// An ordered set of particles joined by sticks.
///
/// The polygon owns its particles; sticks (and any form keeper built on the
/// polygon) refer to them by index, so the particle order must not change
/// once those are created. Rectangular bodies store their corners in
/// [`TOP_LEFT`], [`TOP_RIGHT`], [`BOTTOM_RIGHT`], [`BOTTOM_LEFT`] order.
#[derive(Debug, Clone)]
pub struct Polygon {
    particles: Vec<Particle>,
    sticks: Vec<Stick>,
    owner: OwnerTag,
}

impl Polygon {
    /// Creates an empty polygon
    pub fn new(owner: OwnerTag) -> Self {
        Self {
            particles: Vec::new(),
            sticks: Vec::new(),
            owner,
        }
    }

    /// Creates a closed four-corner polygon covering `rect`.
    ///
    /// The outline sticks are the only sticks; rectangles keep their shape
    /// through a form keeper rather than diagonal braces, so that every
    /// stick is also a boundary edge.
    pub fn rectangle(rect: Rect, owner: OwnerTag, mass: f32, stiffness: f32) -> Self {
        let mut polygon = Self::new(owner);
        for corner in rect.corners() {
            polygon.add_particle(Particle::new(corner, mass, owner));
        }
        polygon.close(stiffness);
        polygon
    }

    /// Creates an open chain through `points`, linking consecutive points with sticks
    pub fn chain<I: IntoIterator<Item = Vector2>>(points: I, owner: OwnerTag, mass: f32, stiffness: f32) -> Self {
        let mut polygon = Self::new(owner);
        for point in points {
            let index = polygon.add_particle(Particle::new(point, mass, owner));
            if index > 0 {
                polygon.add_stick(index - 1, index, stiffness);
            }
        }
        polygon
    }

    #[inline]
    pub fn owner(&self) -> OwnerTag {
        self.owner
    }

    /// Appends a particle, tagging it with this polygon's owner, and returns its index
    pub fn add_particle(&mut self, mut particle: Particle) -> usize {
        particle.set_owner(self.owner);
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Links two existing particles with a stick at their current distance
    pub fn add_stick(&mut self, a: usize, b: usize, stiffness: f32) -> Option<usize> {
        if a == b || a >= self.particles.len() || b >= self.particles.len() {
            return None;
        }
        self.sticks.push(Stick::new(a, b, &self.particles, stiffness));
        Some(self.sticks.len() - 1)
    }

    /// Links every consecutive pair of particles, including last to first
    pub fn close(&mut self, stiffness: f32) {
        let count = self.particles.len();
        if count < 2 {
            return;
        }
        for i in 0..count {
            let j = (i + 1) % count;
            if count == 2 && j == 0 {
                break;
            }
            self.add_stick(i, j, stiffness);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    #[inline]
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    #[inline]
    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Integrates every particle and then relaxes every stick, once per sub-step
    pub fn update(&mut self, params: &IntegrationParams, canvas: &Canvas) {
        for _ in 0..params.sub_steps.max(1) {
            for particle in &mut self.particles {
                particle.update(params);
                particle.keep_inside_canvas(canvas);
            }
            for stick in &self.sticks {
                stick.update(&mut self.particles);
            }
        }
    }

    /// The boundary edges of the polygon, one per stick
    pub fn edges(&self) -> Vec<Edge> {
        self.sticks
            .iter()
            .filter_map(|stick| {
                let start = self.particles.get(stick.a)?.position;
                let end = self.particles.get(stick.b)?.position;
                Some(Edge {
                    a: stick.a,
                    b: stick.b,
                    segment: Segment::new(start, end),
                })
            })
            .collect()
    }

    /// Mass-weighted center of the particles.
    ///
    /// Falls back to the plain average when the total mass is zero, and to the
    /// origin for an empty polygon.
    pub fn center_of_mass(&self) -> Vector2 {
        if self.particles.is_empty() {
            return Vector2::zero();
        }

        let total_mass: f32 = self.particles.iter().map(|p| p.mass).sum();
        if total_mass.abs() > EPSILON {
            self.particles
                .iter()
                .map(|p| p.position * p.mass)
                .sum::<Vector2>()
                / total_mass
        } else {
            self.particles.iter().map(|p| p.position).sum::<Vector2>() / self.particles.len() as f32
        }
    }

    /// Bounding rectangle of the particles
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.particles.iter().map(|p| p.position))
    }

    /// Returns true if any particle touched the ground during the last tick
    pub fn is_grounded(&self) -> bool {
        self.particles.iter().any(Particle::is_in_ground)
    }

    /// Moves every unlocked particle by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        for particle in &mut self.particles {
            particle.displace(offset);
        }
    }

    /// Locks or unlocks every particle
    pub fn set_locked(&mut self, locked: bool) {
        for particle in &mut self.particles {
            particle.set_locked(locked);
        }
    }

    /// Enables or disables collision for every particle
    pub fn set_collision_active(&mut self, active: bool) {
        for particle in &mut self.particles {
            particle.set_collision_active(active);
        }
    }
}

use crate::bodies::{OwnerTag, ParticleFlags};
use crate::core::{Canvas, IntegrationParams};
use crate::math::{Vector2, EPSILON};

/// A point mass integrated with position Verlet.
///
/// Velocity is never stored; it is the difference between `position` and
/// `previous_position`. Anything that moves `position` without touching
/// `previous_position` therefore also changes the particle's velocity.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position
    pub position: Vector2,

    /// Position at the previous step
    pub previous_position: Vector2,

    /// Mass of the particle
    pub mass: f32,

    /// Lock, ground contact and collision participation
    flags: ParticleFlags,

    /// Kind of body the particle belongs to
    owner: OwnerTag,
}

impl Particle {
    /// Creates a particle at rest at `position`
    pub fn new(position: Vector2, mass: f32, owner: OwnerTag) -> Self {
        Self {
            position,
            previous_position: position,
            mass,
            flags: ParticleFlags::COLLISION_ACTIVE,
            owner,
        }
    }

    /// Creates a locked particle that never moves under integration or restoration
    pub fn locked(position: Vector2, mass: f32, owner: OwnerTag) -> Self {
        let mut particle = Self::new(position, mass, owner);
        particle.set_locked(true);
        particle
    }

    #[inline]
    pub fn owner(&self) -> OwnerTag {
        self.owner
    }

    #[inline]
    pub(crate) fn set_owner(&mut self, owner: OwnerTag) {
        self.owner = owner;
    }

    #[inline]
    pub fn flags(&self) -> ParticleFlags {
        self.flags
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.flags.contains(ParticleFlags::LOCKED)
    }

    /// Locks or unlocks the particle. Locking also zeroes its velocity.
    pub fn set_locked(&mut self, locked: bool) {
        self.flags.set(ParticleFlags::LOCKED, locked);
        if locked {
            self.previous_position = self.position;
        }
    }

    #[inline]
    pub fn is_in_ground(&self) -> bool {
        self.flags.contains(ParticleFlags::IN_GROUND)
    }

    #[inline]
    pub fn set_in_ground(&mut self, in_ground: bool) {
        self.flags.set(ParticleFlags::IN_GROUND, in_ground);
    }

    #[inline]
    pub fn is_collision_active(&self) -> bool {
        self.flags.contains(ParticleFlags::COLLISION_ACTIVE)
    }

    #[inline]
    pub fn set_collision_active(&mut self, active: bool) {
        self.flags.set(ParticleFlags::COLLISION_ACTIVE, active);
    }

    /// Displacement over the last step
    #[inline]
    pub fn velocity(&self) -> Vector2 {
        self.position - self.previous_position
    }

    /// Moves the particle by `offset` unless it is locked
    #[inline]
    pub fn displace(&mut self, offset: Vector2) {
        if !self.is_locked() {
            self.position += offset;
        }
    }

    /// Advances the particle by one sub-step.
    ///
    /// The implicit velocity is clamped to `max_velocity` along its own
    /// direction. Airborne particles only feel gravity. Particles touching the
    /// ground additionally feel a horizontal friction force opposed to their
    /// motion, capped so it can stop the particle but never reverse it.
    /// Ground contact is cleared afterwards and must be detected again.
    pub fn update(&mut self, params: &IntegrationParams) {
        if self.is_locked() {
            return;
        }

        let sub_steps = params.sub_steps.max(1) as f32;
        let dt = 1.0 / sub_steps;
        let inv_mass = if self.mass > EPSILON { 1.0 / self.mass } else { 0.0 };

        let mut velocity = self.velocity().clamp_length(params.max_velocity);
        let mut force = Vector2::new(0.0, params.gravity / sub_steps);

        if self.is_in_ground() && velocity.x.abs() > EPSILON {
            let friction = params.ground_friction * params.gravity / sub_steps;
            force.x = -velocity.x.signum() * friction;
        }

        let mut acceleration = force * inv_mass;

        // Friction may bring the particle to rest but must not push it backwards
        let friction_dx = acceleration.x * dt * dt;
        if friction_dx.abs() >= velocity.x.abs() && self.is_in_ground() {
            velocity.x = 0.0;
            acceleration.x = 0.0;
        }

        let next = self.position + velocity + acceleration * (dt * dt);
        self.previous_position = self.position;
        self.position = next;

        self.set_in_ground(false);
    }

    /// Clamps the particle inside the canvas. Touching the floor counts as ground contact.
    pub fn keep_inside_canvas(&mut self, canvas: &Canvas) {
        if self.is_locked() {
            return;
        }

        let min_x = canvas.margin;
        let max_x = canvas.width - canvas.margin;
        let min_y = canvas.margin;
        let max_y = canvas.height - canvas.margin;

        self.position.x = self.position.x.clamp(min_x, max_x);
        if self.position.y >= max_y {
            self.position.y = max_y;
            self.set_in_ground(true);
        } else if self.position.y < min_y {
            self.position.y = min_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> IntegrationParams {
        IntegrationParams {
            gravity: 1.0,
            sub_steps: 1,
            max_velocity: 10.0,
            ground_friction: 0.5,
        }
    }

    #[test]
    fn falls_under_gravity() {
        let mut p = Particle::new(Vector2::new(10.0, 10.0), 1.0, OwnerTag::Player);
        p.update(&params());
        assert_relative_eq!(p.position.y, 11.0);
        p.update(&params());
        assert_relative_eq!(p.position.y, 13.0);
        assert_relative_eq!(p.position.x, 10.0);
    }

    #[test]
    fn heavier_particles_accelerate_less() {
        let mut light = Particle::new(Vector2::zero(), 1.0, OwnerTag::Player);
        let mut heavy = Particle::new(Vector2::zero(), 4.0, OwnerTag::Player);
        light.update(&params());
        heavy.update(&params());
        assert!(heavy.position.y < light.position.y);
    }

    #[test]
    fn ground_flag_is_cleared_by_update() {
        let mut p = Particle::new(Vector2::zero(), 1.0, OwnerTag::Player);
        p.set_in_ground(true);
        p.update(&params());
        assert!(!p.is_in_ground());
    }

    #[test]
    fn velocity_is_clamped_symmetrically() {
        let mut p = Particle::new(Vector2::new(0.0, 0.0), 1.0, OwnerTag::Player);
        p.previous_position = Vector2::new(0.0, -50.0);
        let params = IntegrationParams { gravity: 0.0, ..params() };
        p.update(&params);
        assert_relative_eq!(p.velocity().length(), 10.0, epsilon = 1e-4);
        assert_relative_eq!(p.velocity().x, 0.0);
    }

    #[test]
    fn friction_never_reverses_motion() {
        let mut p = Particle::new(Vector2::new(0.2, 0.0), 1.0, OwnerTag::Player);
        p.previous_position = Vector2::new(0.0, 0.0);
        p.set_in_ground(true);
        p.update(&params());
        assert_relative_eq!(p.velocity().x, 0.0);
    }

    #[test]
    fn keep_inside_canvas_marks_floor_contact() {
        let canvas = Canvas { width: 100.0, height: 100.0, margin: 5.0 };
        let mut p = Particle::new(Vector2::new(120.0, 130.0), 1.0, OwnerTag::Player);
        p.keep_inside_canvas(&canvas);
        assert_eq!(p.position, Vector2::new(95.0, 95.0));
        assert!(p.is_in_ground());

        let mut q = Particle::new(Vector2::new(-3.0, 1.0), 1.0, OwnerTag::Player);
        q.keep_inside_canvas(&canvas);
        assert_eq!(q.position, Vector2::new(5.0, 5.0));
        assert!(!q.is_in_ground());
    }
}

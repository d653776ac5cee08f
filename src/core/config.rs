use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the platformer simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct SimulationConfig {
    /// Width of the simulated canvas
    pub canvas_width: f32,

    /// Height of the simulated canvas
    pub canvas_height: f32,

    /// Inset from the canvas border that particles are clamped to
    pub canvas_margin: f32,

    /// Downward gravity, in pixels per tick squared
    pub gravity: f32,

    /// Number of integration sub-steps per tick
    pub sub_steps: u32,

    /// Maximum per-tick displacement of a particle
    pub max_velocity: f32,

    /// Ground friction, as a fraction of gravity
    pub ground_friction: f32,

    /// Mass given to generated particles
    pub particle_mass: f32,

    /// Stiffness of the sticks that outline bodies
    pub stick_stiffness: f32,

    /// Form keeper stiffness for the player, dinosaurs and goal
    pub body_form_stiffness: f32,

    /// Form keeper stiffness for polygons drawn with the pencil
    pub drawn_form_stiffness: f32,

    /// Distance a colliding particle is pushed past the edge it hit
    pub collision_push: f32,

    /// Thickness of the edge zones around a platform
    pub platform_hitbox: f32,

    /// X coordinate that point-in-polygon rays are cast toward
    pub ray_limit: f32,

    /// Number of lives before the game is lost
    pub life_slots: u32,

    /// Ticks after a life loss during which further hits are ignored
    pub hit_cooldown_ticks: u32,

    /// Ticks between a win/lose and the end of the game
    pub end_countdown_ticks: u32,

    /// Ticks between two dinosaur decisions
    pub dino_decision_interval: u64,

    /// Horizontal distance within which a dinosaur jumps at the player
    pub dino_sight_range: f32,

    /// Horizontal displacement applied by a single move command
    pub move_step: f32,

    /// Upward displacement applied by a jump
    pub jump_impulse: f32,

    /// Total number of points the pencil may place
    pub max_polygon_points: usize,

    /// Minimum distance between two consecutive pencil points; 0 accepts every point
    pub min_point_spacing: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1280.0,
            canvas_height: 720.0,
            canvas_margin: 5.0,
            gravity: 0.6,
            sub_steps: 1,
            max_velocity: 20.0,
            ground_friction: 0.5,
            particle_mass: 1.0,
            stick_stiffness: 1.0,
            body_form_stiffness: 0.5,
            drawn_form_stiffness: 0.1,
            collision_push: 8.0,
            platform_hitbox: 10.0,
            ray_limit: 100_000.0,
            life_slots: 3,
            hit_cooldown_ticks: 60,
            end_countdown_ticks: 300,
            dino_decision_interval: 60,
            dino_sight_range: 400.0,
            move_step: 2.0,
            jump_impulse: 12.0,
            max_polygon_points: 200,
            min_point_spacing: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Checks that every parameter is within its usable range
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.canvas_margin < 0.0
            || 2.0 * self.canvas_margin >= self.canvas_width.min(self.canvas_height)
        {
            return Err(PhysicsError::InvalidParameter(format!(
                "canvas margin {} does not fit the canvas",
                self.canvas_margin
            )));
        }
        if self.sub_steps == 0 {
            return Err(PhysicsError::InvalidParameter("sub_steps must be at least 1".into()));
        }
        if !(self.particle_mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "particle mass must be positive, got {}",
                self.particle_mass
            )));
        }
        if !(self.max_velocity > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "max velocity must be positive, got {}",
                self.max_velocity
            )));
        }
        for (name, value) in [
            ("stick_stiffness", self.stick_stiffness),
            ("body_form_stiffness", self.body_form_stiffness),
            ("drawn_form_stiffness", self.drawn_form_stiffness),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        if !(self.min_point_spacing >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "min_point_spacing must be non-negative, got {}",
                self.min_point_spacing
            )));
        }
        if self.life_slots == 0 {
            return Err(PhysicsError::InvalidParameter("life_slots must be at least 1".into()));
        }
        if self.dino_decision_interval == 0 {
            return Err(PhysicsError::InvalidParameter(
                "dino_decision_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parameters consumed by particle integration
    #[inline]
    pub fn integration(&self) -> IntegrationParams {
        IntegrationParams {
            gravity: self.gravity,
            sub_steps: self.sub_steps.max(1),
            max_velocity: self.max_velocity,
            ground_friction: self.ground_friction,
        }
    }

    /// Bounds particles are kept inside of
    #[inline]
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.canvas_width,
            height: self.canvas_height,
            margin: self.canvas_margin,
        }
    }
}

/// The subset of the configuration a single integration step needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationParams {
    /// Downward gravity per tick squared
    pub gravity: f32,
    /// Sub-steps per tick
    pub sub_steps: u32,
    /// Per-tick displacement clamp
    pub max_velocity: f32,
    /// Friction as a fraction of gravity
    pub ground_friction: f32,
}

impl Default for IntegrationParams {
    fn default() -> Self {
        SimulationConfig::default().integration()
    }
}

/// Rectangular simulation bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        SimulationConfig::default().canvas()
    }
}

use crate::bodies::{Facing, FormKeeper, OwnerTag, Polygon, BOTTOM_LEFT, TOP_LEFT, TOP_RIGHT};
use crate::core::{Canvas, IntegrationParams};
use crate::math::{Rect, Vector2};

/// A polygon kept in shape by a form keeper: the unit every body in the world is built from
#[derive(Debug, Clone)]
pub struct SoftBody {
    polygon: Polygon,
    form_keeper: FormKeeper,
    facing: Facing,
}

impl SoftBody {
    /// Wraps `polygon`, capturing its current shape as the rest shape
    pub fn new(polygon: Polygon, form_stiffness: f32) -> Self {
        let form_keeper = FormKeeper::new(&polygon, form_stiffness);
        Self {
            polygon,
            form_keeper,
            facing: Facing::default(),
        }
    }

    /// Builds a rectangular body
    pub fn rectangle(rect: Rect, owner: OwnerTag, mass: f32, stick_stiffness: f32, form_stiffness: f32) -> Self {
        Self::new(Polygon::rectangle(rect, owner, mass, stick_stiffness), form_stiffness)
    }

    #[inline]
    pub fn owner(&self) -> OwnerTag {
        self.polygon.owner()
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    #[inline]
    pub fn form_keeper(&self) -> &FormKeeper {
        &self.form_keeper
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Integrates the polygon and restores its form
    pub fn update(&mut self, params: &IntegrationParams, canvas: &Canvas) {
        self.polygon.update(params, canvas);
        self.form_keeper.restore_original_form(&mut self.polygon);
    }

    /// Center of mass as of the last update
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.form_keeper.center()
    }

    /// Horizontal extent, from the top corners for rectangles
    pub fn width(&self) -> f32 {
        let particles = self.polygon.particles();
        if particles.len() >= 4 {
            particles[TOP_RIGHT].position.x - particles[TOP_LEFT].position.x
        } else {
            self.bounds().map_or(0.0, |r| r.width())
        }
    }

    /// Vertical extent, from the left corners for rectangles
    pub fn height(&self) -> f32 {
        let particles = self.polygon.particles();
        if particles.len() >= 4 {
            particles[BOTTOM_LEFT].position.y - particles[TOP_LEFT].position.y
        } else {
            self.bounds().map_or(0.0, |r| r.height())
        }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.polygon.bounds()
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.polygon.is_grounded()
    }

    /// Shifts the body left by `step`; Verlet turns the shift into velocity
    pub fn move_left(&mut self, step: f32) {
        self.facing = Facing::Left;
        self.polygon.translate(Vector2::new(-step, 0.0));
    }

    /// Shifts the body right by `step`; Verlet turns the shift into velocity
    pub fn move_right(&mut self, step: f32) {
        self.facing = Facing::Right;
        self.polygon.translate(Vector2::new(step, 0.0));
    }

    /// Lifts the body by `impulse` if it touched the ground on the last tick.
    /// Returns whether the jump happened.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.polygon.translate(Vector2::new(0.0, -impulse));
        for particle in self.polygon.particles_mut() {
            particle.set_in_ground(false);
        }
        true
    }
}

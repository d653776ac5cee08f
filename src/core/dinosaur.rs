use crate::bodies::{Facing, SoftBody};
use crate::core::SimulationConfig;
use crate::math::Vector2;

/// What a dinosaur decided to do at its last decision tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DinoBehavior {
    #[default]
    Standing,
    Jumping,
}

/// An enemy body with a sprite identifier and a periodic jump/stand decision
#[derive(Debug, Clone)]
pub struct Dinosaur {
    body: SoftBody,
    image: String,
    behavior: DinoBehavior,
}

impl Dinosaur {
    pub fn new(body: SoftBody, image: impl Into<String>) -> Self {
        Self {
            body,
            image: image.into(),
            behavior: DinoBehavior::Standing,
        }
    }

    #[inline]
    pub fn body(&self) -> &SoftBody {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut SoftBody {
        &mut self.body
    }

    /// Sprite identifier supplied by the level
    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[inline]
    pub fn behavior(&self) -> DinoBehavior {
        self.behavior
    }

    /// Turns toward the player and jumps at it when it is within sight and the
    /// dinosaur is standing on something; otherwise stands. Returns whether it jumped.
    pub fn decide(&mut self, player_center: Vector2, config: &SimulationConfig) -> bool {
        let dx = player_center.x - self.body.center().x;
        self.body.set_facing(if dx < 0.0 { Facing::Left } else { Facing::Right });

        let jumped = dx.abs() <= config.dino_sight_range && self.body.jump(config.jump_impulse);
        if jumped {
            let lunge = config.move_step * dx.signum();
            self.body.polygon_mut().translate(Vector2::new(lunge, 0.0));
        }

        let behavior = if jumped { DinoBehavior::Jumping } else { DinoBehavior::Standing };
        if behavior != self.behavior {
            tracing::debug!(image = %self.image, ?behavior, "dinosaur changed behavior");
        }
        self.behavior = behavior;
        jumped
    }
}

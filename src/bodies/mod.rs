mod particle;
mod stick;
mod polygon;
mod form_keeper;
mod owner;
mod soft_body;
mod platform;

pub use self::particle::Particle;
pub use self::stick::Stick;
pub use self::polygon::{Polygon, TOP_LEFT, TOP_RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT};
pub use self::form_keeper::FormKeeper;
pub use self::owner::OwnerTag;
pub use self::soft_body::SoftBody;
pub use self::platform::{Platform, PlatformSide};

use bitflags::bitflags;

bitflags! {
    /// State bits carried by every particle
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct ParticleFlags: u8 {
        /// Particle is pinned and ignores integration, restoration and collision pushes
        const LOCKED = 0x01;

        /// Particle touched the ground during the current tick
        const IN_GROUND = 0x02;

        /// Particle takes part in polygon-versus-polygon collision
        const COLLISION_ACTIVE = 0x04;
    }
}

/// Direction a body is facing, read by renderers to mirror sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

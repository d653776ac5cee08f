pub mod world;
pub mod config;
pub mod events;
pub mod level;
pub mod state;
mod dinosaur;

pub use self::world::PhysicWorld;
pub use self::config::{SimulationConfig, IntegrationParams, Canvas};
pub use self::events::{EventQueue, WorldEvent, MAX_QUEUED_EVENTS};
pub use self::level::{LevelDescriptor, RectDescriptor, DinosaurDescriptor};
pub use self::state::{GameState, Outcome, SimulationContext};
pub use self::dinosaur::{Dinosaur, DinoBehavior};

/// Addresses a body in a [`PhysicWorld`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyHandle {
    /// The player body
    Player,

    /// A dinosaur, by index in spawn order
    Dinosaur(usize),

    /// The goal body
    Goal,

    /// A drawn polygon, by index in commit order
    Drawn(usize),
}

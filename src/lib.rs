//! Soft-body Verlet physics for a 2D platformer.
//!
//! Bodies are polygons of Verlet particles joined by soft sticks and held in
//! shape by form keepers. Polygons collide through ray-casting
//! point-in-polygon tests, and land on static axis-aligned platforms.
//! [`PhysicWorld`] runs the per-tick sequence and tracks the round's
//! win/lose state; rendering, input and level loading live outside the crate.

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod authoring;

/// Re-export common types for easier usage
pub use crate::core::{PhysicWorld, SimulationConfig, LevelDescriptor, GameState, WorldEvent};
pub use crate::bodies::{Particle, Stick, Polygon, FormKeeper, SoftBody, Platform, OwnerTag};
pub use crate::authoring::DinoPencil;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid level: {0}")]
        InvalidLevel(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::error::PhysicsError;
use crate::math::{Rect, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rectangle as supplied by a level loader: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RectDescriptor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectDescriptor {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn to_rect(&self) -> Rect {
        Rect::from_position_size(Vector2::new(self.x, self.y), self.width, self.height)
    }

    fn check(&self, what: &str) -> Result<()> {
        if self.to_rect().is_valid() {
            Ok(())
        } else {
            Err(PhysicsError::InvalidLevel(format!(
                "{} rectangle {:?} must have a finite position and positive size",
                what, self
            )))
        }
    }
}

/// A dinosaur spawn: its starting rectangle and the sprite the renderer should use
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DinosaurDescriptor {
    pub rect: RectDescriptor,
    pub image: String,
}

/// Already-parsed geometry of one level.
///
/// Player and goal are optional here so that a descriptor decoded from an
/// incomplete file can still be represented; [`LevelDescriptor::validate`]
/// rejects it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LevelDescriptor {
    pub player: Option<RectDescriptor>,
    pub goal: Option<RectDescriptor>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub dinosaurs: Vec<DinosaurDescriptor>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub platforms: Vec<RectDescriptor>,
}

impl LevelDescriptor {
    /// Checks that every required rectangle is present and well formed
    pub fn validate(&self) -> Result<()> {
        self.player
            .as_ref()
            .ok_or_else(|| PhysicsError::InvalidLevel("level has no player rectangle".into()))?
            .check("player")?;
        self.goal
            .as_ref()
            .ok_or_else(|| PhysicsError::InvalidLevel("level has no goal rectangle".into()))?
            .check("goal")?;

        for (i, dino) in self.dinosaurs.iter().enumerate() {
            dino.rect.check(&format!("dinosaur {}", i))?;
        }
        for (i, platform) in self.platforms.iter().enumerate() {
            platform.check(&format!("platform {}", i))?;
        }
        Ok(())
    }
}

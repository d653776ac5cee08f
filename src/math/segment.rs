use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A finite line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point of the segment
    pub start: Vector2,

    /// End point of the segment
    pub end: Vector2,
}

impl Segment {
    /// Creates a new segment between two points
    #[inline]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Returns the vector from start to end
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment
    #[inline]
    pub fn midpoint(&self) -> Vector2 {
        (self.start + self.end) * 0.5
    }

    /// Returns the point at parameter `t` (0 = start, 1 = end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector2 {
        self.start + self.direction() * t
    }

    /// Returns true if the segment has (approximately) zero length
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction().is_zero()
    }
}

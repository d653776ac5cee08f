use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle in screen space, stored as min/max corners
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner (minimum x and y)
    pub min: Vector2,

    /// Bottom-right corner (maximum x and y)
    pub max: Vector2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size
    #[inline]
    pub fn from_position_size(position: Vector2, width: f32, height: f32) -> Self {
        Self {
            min: position,
            max: position + Vector2::new(width, height),
        }
    }

    /// Creates the bounding rectangle of a set of points
    pub fn from_points<I: IntoIterator<Item = Vector2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut min = first;
        let mut max = first;
        for point in iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Returns the width of the rectangle
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the rectangle
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the center of the rectangle
    #[inline]
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the four corners in top-left, top-right, bottom-right, bottom-left order
    #[inline]
    pub fn corners(&self) -> [Vector2; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Checks if this rectangle contains a point (edges inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns true if the rectangle has a positive, finite area
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() &&
        self.width() > 0.0 && self.height() > 0.0
    }
}

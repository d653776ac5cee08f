mod vector;
mod segment;
mod rect;

pub use vector::Vector2;
pub use segment::Segment;
pub use rect::Rect;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

//! Runtime authoring of new bodies from user strokes.

mod dino_pencil;

pub use self::dino_pencil::{DinoPencil, PencilState};

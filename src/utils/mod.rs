//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_face_normal, ccw_scaled_face_normal};
pub use self::flatten::{flatten, Flatten};

mod ccw_face_normal;
mod flatten;

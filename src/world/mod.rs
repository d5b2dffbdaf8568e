mod camera;
mod geometry;
mod map;

pub use camera::Camera;
pub use geometry::{Axis, Linedef, LinedefId, rotate, segment_intersection};
pub use map::{Map, MapError, RECORD_LEN};

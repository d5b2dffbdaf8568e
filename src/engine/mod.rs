mod projection;
mod raycast;
mod types;

pub use projection::{ColumnHit, project, project_into};
pub use raycast::{CastParams, RayHit, cast, cast_all};
pub use types::Screen;

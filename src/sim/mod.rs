mod motion;

pub use motion::{MOVE_MARGIN, apply_input};

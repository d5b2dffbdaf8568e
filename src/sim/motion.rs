//! Turns damped input deltas into camera motion, with the same marching
//! caster used for rendering doubling as the collision probe.

use crate::{
    engine::{CastParams, cast},
    world::{Camera, Map},
};

/// Closest the camera may get to a wall, in world units. Inside this band
/// the frame's displacement is clamped to zero — a full stop, no sliding.
pub const MOVE_MARGIN: f32 = 0.5;

/// Apply one frame of input to the camera.
///
/// * `turn` — signed rotation delta in radians; the view rotates by
///   `-turn` (pointer-right turns clockwise), plane and facing together.
/// * `advance` — signed forward/back displacement in world units, already
///   damped by the input layer.
///
/// A wall closer than `MOVE_MARGIN` after the intended displacement stops
/// the move entirely for this frame. `advance == 0.0` skips the collision
/// cast. On an empty map the cast always misses, so motion is unclamped.
pub fn apply_input(cam: &mut Camera, map: &Map, turn: f32, advance: f32) {
    cam.turn(-turn);

    if advance == 0.0 {
        return;
    }

    let probe = if advance > 0.0 { cam.facing } else { -cam.facing };

    let advance = match cast(cam.pos, probe, map, CastParams::MOVEMENT) {
        Some(hit) if cam.pos.distance(hit.point) - advance.abs() < MOVE_MARGIN => 0.0,
        _ => advance,
    };

    cam.advance(advance);
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

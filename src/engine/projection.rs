//! Per-column view projection.
//!
//! One ray per screen column, fanned across the camera plane; each hit is
//! reduced to the distance/height/axis triple the rasterizer needs.

use glam::Vec2;

use crate::{
    engine::raycast::{CastParams, cast},
    engine::types::Screen,
    world::{Axis, Camera, Map},
};

/// What one screen column sees. A column that saw nothing (ray exhausted
/// its bound) is simply `None` in the output.
#[derive(Clone, Copy, Debug)]
pub struct ColumnHit {
    /// Perpendicular (axis-projected) distance to the wall, in world units.
    pub distance: f32,
    /// The wall's relative height factor.
    pub height: f32,
    /// Dominant axis of the wall, for shading variation.
    pub axis: Axis,
}

/// Project the map into `out`, one sample per screen column.
///
/// `out` is resized to `screen.w` and every slot overwritten, so callers
/// can keep one buffer alive across frames instead of reallocating.
pub fn project_into(cam: &Camera, map: &Map, screen: &Screen, out: &mut Vec<Option<ColumnHit>>) {
    out.clear();
    out.reserve(screen.w);

    for x in 0..screen.w {
        let dir = cam.column_ray(x, screen.w);
        let sample = cast(cam.pos, dir, map, CastParams::PROJECTION).map(|hit| {
            let ld = &map.linedefs()[hit.linedef];
            ColumnHit {
                distance: perpendicular_distance(cam.pos, hit.point, dir),
                height: ld.height,
                axis: ld.dominant_axis(),
            }
        });
        out.push(sample);
    }
}

/// Convenience wrapper allocating a fresh sample buffer.
pub fn project(cam: &Camera, map: &Map, screen: &Screen) -> Vec<Option<ColumnHit>> {
    let mut out = Vec::new();
    project_into(cam, map, screen, &mut out);
    out
}

/// Distance from `origin` to `hit` projected onto one axis of the ray,
/// `|Δx / dir.x|` with a fall-back to the Y axis when the X projection is
/// unusable (axis-aligned ray, or a hit dead on the origin's X).
///
/// Dividing by the *unnormalized* column ray is what keeps walls flat on
/// screen: every column measures depth along the camera's facing axis, so
/// equal-depth hits get equal distances and the fish-eye bend of raw
/// Euclidean distance never appears.
#[inline]
fn perpendicular_distance(origin: Vec2, hit: Vec2, dir: Vec2) -> f32 {
    let xdist = ((hit.x - origin.x) / dir.x).abs();
    if xdist != 0.0 && xdist.is_finite() {
        xdist
    } else {
        ((hit.y - origin.y) / dir.y).abs()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

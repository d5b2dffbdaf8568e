//! Player view-point in map space.

use glam::Vec2;

use crate::world::geometry::rotate;

/// Camera state threaded through projection and motion every frame.
///
/// * `facing` is unit length (kept so by construction: it is only ever
///   rotated, never scaled).
/// * `plane` is perpendicular to `facing` with magnitude `tan(fov/2)`; it
///   spans half the projection plane, so `facing ± plane` are the view
///   frustum's edge rays.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec2,
    pub facing: Vec2,
    pub plane: Vec2,
}

impl Camera {
    /// Create a camera at `pos` looking along `facing` with a horizontal
    /// field of view of `fov_deg` degrees.
    pub fn new(pos: Vec2, facing: Vec2, fov_deg: f32) -> Self {
        let facing = facing.normalize();
        let plane = facing.perp() * (fov_deg.to_radians() / 2.0).tan();
        Self { pos, facing, plane }
    }

    /// Original spawn: origin, looking along −X, 90° FoV.
    pub fn default_spawn() -> Self {
        Self::new(Vec2::ZERO, Vec2::NEG_X, 90.0)
    }

    /*──────────────────────── per-frame mutation ────────────────────*/

    /// Rotate view direction and projection plane together by `angle`
    /// radians. One rotor for both keeps them exactly perpendicular and
    /// preserves the plane's magnitude (the FoV).
    pub fn turn(&mut self, angle: f32) {
        self.facing = rotate(self.facing, angle);
        self.plane = rotate(self.plane, angle);
    }

    /// Move along the facing axis by `dist` (negative = backpedal).
    #[inline]
    pub fn advance(&mut self, dist: f32) {
        self.pos += self.facing * dist;
    }

    /*──────────────────────── derived rays ──────────────────────────*/

    /// Ray direction for screen column `x` of `w`: the facing vector offset
    /// along the plane by `cameraX ∈ [-1, 1)`. Deliberately *not*
    /// normalized — the axis-projected distance in the projector depends on
    /// this exact vector.
    #[inline]
    pub fn column_ray(&self, x: usize, w: usize) -> Vec2 {
        let camera_x = (2.0 * x as f32) / w as f32 - 1.0;
        self.facing + self.plane * camera_x
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

//! Map-space geometry: wall segments and the intersection primitive the
//! whole engine is built on.

use glam::Vec2;

/// Index of a linedef inside its [`Map`](crate::world::Map).
pub type LinedefId = usize;

/// Which of a linedef's map-space extents is larger.
///
/// The rasterizer attenuates `Vertical` walls to fake depth cues, the same
/// trick classic grid raycasters use for N/S vs E/W faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One wall of the map ("linedef" in the Doom sense, but single-sided and
/// always solid here).
///
/// `height` is a relative factor against the column's full on-screen size,
/// not a world-space altitude: `1.0` fills the column the projection gives
/// it, `0.5` draws a half-height wall.
#[derive(Clone, Copy, Debug)]
pub struct Linedef {
    pub v1: Vec2,
    pub v2: Vec2,
    pub height: f32,
}

impl Linedef {
    pub fn new(v1: Vec2, v2: Vec2, height: f32) -> Self {
        Self { v1, v2, height }
    }

    /// Zero-length linedefs cannot be intersected and are rejected at load.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.v1 == self.v2
    }

    /// Larger of the X/Y extents; exact diagonals count as `Horizontal`.
    #[inline]
    pub fn dominant_axis(&self) -> Axis {
        let d = self.v2 - self.v1;
        if d.x.abs() >= d.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/*──────────────────────── intersection primitive ─────────────────────*/

/// Intersect segment `a0→a1` with segment `b0→b1`.
///
/// Solves the 2×2 parametric system in cross-product form and returns the
/// point where both parameters land in `[0, 1]`, or `None` otherwise.
///
/// **Known edge case**: the parallel test is an *exact* `d == 0.0`
/// comparison, not an epsilon band. Nearly-parallel segments therefore take
/// the division path and can produce numerically unstable parameters. The
/// marching caster above this function tolerates that (a later probe step
/// meets the wall again at a healthier angle), so the exact test is kept
/// rather than silently widened.
pub fn segment_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let s1 = a1 - a0;
    let s2 = b1 - b0;

    let d = -s2.x * s1.y + s1.x * s2.y;
    if d == 0.0 {
        return None; // parallel or anti-parallel (exact test, see above)
    }

    let s = (-s1.y * (a0.x - b0.x) + s1.x * (a0.y - b0.y)) / d;
    let t = (s2.x * (a0.y - b0.y) - s2.y * (a0.x - b0.x)) / d;

    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
        Some(a0 + s1 * t)
    } else {
        None
    }
}

/// Rotate `v` by `angle` radians (counter-clockwise positive).
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const TOL: f32 = 1e-5;

    /*------------------------------------------------------------------*/
    /* 1. Crossing segments meet where they should                      */
    /*------------------------------------------------------------------*/
    #[test]
    fn crossing_segments_intersect_on_both() {
        let p = segment_intersection(
            vec2(-1.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, -1.0),
            vec2(0.0, 1.0),
        )
        .expect("perpendicular cross must hit");
        assert!(p.distance(vec2(0.0, 0.0)) < TOL);

        // Off-center, non-axis-aligned cross.
        let p = segment_intersection(
            vec2(0.0, 0.0),
            vec2(4.0, 4.0),
            vec2(0.0, 4.0),
            vec2(4.0, 0.0),
        )
        .expect("diagonal cross must hit");
        assert!(p.distance(vec2(2.0, 2.0)) < TOL);
    }

    /*------------------------------------------------------------------*/
    /* 2. Infinite lines cross, finite extents don't                    */
    /*------------------------------------------------------------------*/
    #[test]
    fn non_overlapping_extents_miss() {
        let p = segment_intersection(
            vec2(-1.0, 0.0),
            vec2(1.0, 0.0),
            vec2(5.0, -1.0),
            vec2(5.0, 1.0),
        );
        assert!(p.is_none());
    }

    /*------------------------------------------------------------------*/
    /* 3. Exactly parallel segments never intersect                     */
    /*------------------------------------------------------------------*/
    #[test]
    fn parallel_segments_miss() {
        let p = segment_intersection(
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1.0),
        );
        assert!(p.is_none());

        // anti-parallel, collinear but disjoint
        let p = segment_intersection(
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(3.0, 3.0),
            vec2(2.0, 2.0),
        );
        assert!(p.is_none());
    }

    /*------------------------------------------------------------------*/
    /* 4. Near-zero determinant stays finite                            */
    /*------------------------------------------------------------------*/
    #[test]
    fn intersection_near_parallel_is_stable() {
        // Second segment tilted by a hair: d is tiny but nonzero, so the
        // division path runs. The result must either be a finite point on
        // both segments or a clean miss, never NaN/inf.
        let a0 = vec2(0.0, 0.0);
        let a1 = vec2(10.0, 0.0);
        let b0 = vec2(0.0, 1.0e-3);
        let b1 = vec2(10.0, -1.0e-6);
        if let Some(p) = segment_intersection(a0, a1, b0, b1) {
            assert!(p.is_finite());
            assert!((0.0..=10.0).contains(&p.x));
        }
    }

    /*------------------------------------------------------------------*/
    /* 5. Argument order does not change the point                      */
    /*------------------------------------------------------------------*/
    #[test]
    fn intersection_is_symmetric() {
        let (a0, a1) = (vec2(-2.0, -1.0), vec2(3.0, 2.0));
        let (b0, b1) = (vec2(-1.0, 2.0), vec2(2.0, -2.0));
        let p = segment_intersection(a0, a1, b0, b1).unwrap();
        let q = segment_intersection(b0, b1, a0, a1).unwrap();
        assert!(p.distance(q) < TOL);
    }

    /*------------------------------------------------------------------*/
    /* 6. Rotation round-trips                                          */
    /*------------------------------------------------------------------*/
    #[test]
    fn rotate_round_trip() {
        let v = vec2(3.0, -1.5);
        for i in 0..16 {
            let a = i as f32 * 0.41;
            let back = rotate(rotate(v, a), -a);
            assert!(back.distance(v) < TOL, "angle {a}: {back:?}");
        }
    }

    /*------------------------------------------------------------------*/
    /* 7. Dominant axis classification                                  */
    /*------------------------------------------------------------------*/
    #[test]
    fn dominant_axis_picks_larger_extent() {
        let flat = Linedef::new(vec2(0.0, 0.0), vec2(5.0, 1.0), 1.0);
        assert_eq!(flat.dominant_axis(), Axis::Horizontal);

        let steep = Linedef::new(vec2(2.0, 0.0), vec2(1.0, 8.0), 1.0);
        assert_eq!(steep.dominant_axis(), Axis::Vertical);

        // exact diagonal ties break toward Horizontal
        let diag = Linedef::new(vec2(0.0, 0.0), vec2(3.0, 3.0), 1.0);
        assert_eq!(diag.dominant_axis(), Axis::Horizontal);
    }
}

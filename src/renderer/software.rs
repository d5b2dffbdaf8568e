//! ---------------------------------------------------------------------------
//! Classic software (CPU) column rasterizer
//!
//! * Fills an internal `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * One vertical strip per projection sample: a zero-distance wall fills
//!   the whole column, farther walls shrink as `height / distance`, and the
//!   strip is centered on the horizon line.
//! * Inside a strip the brightness ramps linearly from [`SHADE_LO`] at the
//!   bottom to [`SHADE_HI`] at the top (the original's hobo texture);
//!   vertical-axis walls are attenuated to ¾ for a depth cue. Everything
//!   else — sky, floor, miss columns — is the original's flat red.
//! ---------------------------------------------------------------------------

use crate::{
    engine::ColumnHit,
    renderer::{Renderer, Rgb},
    world::Axis,
};

/// Void/background colour (the original's red fill).
pub const VOID: Rgb = 0x00FF_0000;

const SHADE_LO: f32 = 20.0;
const SHADE_HI: f32 = 200.0;

/// CPU column rasterizer.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(VOID);
    }

    fn draw_column(&mut self, x: usize, sample: &Option<ColumnHit>) {
        debug_assert!(x < self.width, "column {x} outside frame");
        let Some(hit) = sample else {
            return; // miss columns stay void
        };

        let h = self.height as f32;

        // A zero-dist wall takes the whole column; farther walls take less.
        let size = h / hit.distance;
        if !size.is_finite() || size <= 0.0 {
            return;
        }

        // The wall occupies space centered on the horizon; its relative
        // height factor stretches it upward from the bottom edge.
        let bottom = -size / 2.0 + h / 2.0;
        let top = bottom + size * hit.height;

        // strip entirely outside the frame (close wall with a small height
        // factor pushes the whole span below row 0)
        if top < 0.0 || bottom > h - 1.0 {
            return;
        }

        let dim = match hit.axis {
            Axis::Horizontal => 1.0,
            Axis::Vertical => 0.75,
        };

        let y0 = bottom.ceil().max(0.0) as usize;
        let y1 = top.floor().min(h - 1.0) as usize;
        if y1 < y0 {
            return; // span falls between two pixel rows
        }
        for y in y0..=y1 {
            let shade = lintop(bottom, SHADE_LO, top, SHADE_HI, y as f32) * dim;
            let g = shade.clamp(0.0, 255.0) as u32;
            // screen rows grow downward; the map keeps row 0 at the top
            let row = self.height - 1 - y;
            self.scratch[row * self.width + x] = g << 16 | g << 8 | g;
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgb], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/// Linear interpolation mapping `t` from the span `x1..x2` onto `y1..y2`
/// (unclamped). Degenerate spans collapse to `y1`.
#[inline]
fn lintop(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if x2 == x1 {
        return y1;
    }
    y1 + (y2 - y1) * ((t - x1) / (x2 - x1))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

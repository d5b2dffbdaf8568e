//! Rendering abstraction layer.
//!
//! The engine never touches a pixel buffer directly: projection produces a
//! row of [`ColumnHit`] samples and hands them to a type implementing
//! [`Renderer`]. That keeps the core testable without a window and leaves
//! room for other back-ends (GPU texture upload, terminal cells, …)
//! without changing engine code.

use crate::engine::ColumnHit;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgb = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` loans the finished buffer to a user-supplied closure exactly
/// once per frame; software callers typically forward it to their
/// window-manager (`|fb, w, h| window.update_with_buffer(fb, w, h)`).
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one screen column from its projection sample.
    fn draw_column(&mut self, x: usize, sample: &Option<ColumnHit>);

    /// Finish the frame and hand the buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgb], usize, usize);
}

/// Convenience blanket-impl: rasterise a whole column row in one call.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        cols: &[Option<ColumnHit>],
        submit: F,
    ) where
        F: FnOnce(&[Rgb], usize, usize),
    {
        self.begin_frame(width, height);
        for (x, sample) in cols.iter().enumerate() {
            self.draw_column(x, sample);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

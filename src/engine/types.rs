/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

impl Default for Screen {
    /// The original's 320×200 mode-Y-ish resolution.
    fn default() -> Self {
        Self::new(320, 200)
    }
}

//! Interactive first-person software viewer.
//!
//! Controls  W/S or ↑/↓ = forward/back  A/D or ←/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- assets/corridor.map --fov 90
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, Scale, ScaleMode, Window, WindowOptions};

use linecast::{
    engine::{Screen, project_into},
    renderer::{Renderer, software::Software},
    sim::apply_input,
    world::{Camera, Map},
};

/// Radians of turn per frame while a turn key is held (the pointer-capture
/// layer of the original damped mouse X by 1/20; this is the keyboard
/// equivalent at ~60 fps).
const TURN_DELTA: f32 = 0.045;
/// World units of displacement per frame while a move key is held.
const MOVE_DELTA: f32 = 0.06;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map file in the flat 8-reals-per-linedef text format
    /// (built-in demo room when omitted)
    map: Option<PathBuf>,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,

    /// Frame-buffer width in pixels
    #[arg(long, default_value_t = 320)]
    width: usize,

    /// Frame-buffer height in pixels
    #[arg(long, default_value_t = 200)]
    height: usize,

    /// Integer window magnification (1, 2, 4, 8, 16 or 32)
    #[arg(long, default_value_t = 4)]
    window_scale: u32,
}

/// Map the CLI magnification onto minifb's fixed scale steps.
fn window_scale(n: u32) -> Option<Scale> {
    match n {
        1 => Some(Scale::X1),
        2 => Some(Scale::X2),
        4 => Some(Scale::X4),
        8 => Some(Scale::X8),
        16 => Some(Scale::X16),
        32 => Some(Scale::X32),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let scale = window_scale(opts.window_scale).ok_or_else(|| {
        anyhow::anyhow!(
            "--window-scale must be a power of two in 1..=32, got {}",
            opts.window_scale
        )
    })?;

    let map = match &opts.map {
        Some(path) => Map::from_file(path)?,
        None => Map::demo(),
    };
    if map.skipped() > 0 {
        eprintln!("warning: skipped {} degenerate linedefs", map.skipped());
    }
    println!("{} linedefs", map.len());

    let screen = Screen::new(opts.width, opts.height);
    let mut camera = Camera::new(glam::Vec2::ZERO, glam::Vec2::NEG_X, opts.fov);

    let mut renderer = Software::default();
    let mut cols = Vec::new();

    let mut win = Window::new(
        "linecast",
        screen.w,
        screen.h,
        WindowOptions {
            scale,
            scale_mode: ScaleMode::AspectRatioStretch,
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start

        /* --------------- gather this frame's input deltas ---------------- */
        let mut turn = 0.0;
        let mut advance = 0.0;

        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            advance += MOVE_DELTA;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            advance -= MOVE_DELTA;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            turn -= TURN_DELTA;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            turn += TURN_DELTA;
        }

        /* move, project, rasterise ---------------------------------------- */
        apply_input(&mut camera, &map, turn, advance);

        project_into(&camera, &map, &screen, &mut cols);

        renderer.begin_frame(screen.w, screen.h);
        for (x, sample) in cols.iter().enumerate() {
            renderer.draw_column(x, sample);
        }
        renderer.end_frame(|fb, w, h| {
            // ─────────── accumulate & report every ~3 s ────────────────────
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

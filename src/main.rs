//! Minimal 2-D map viewer.
//!
//! ```bash
//! cargo run --release --bin linecast -- [map.txt]
//! ```
//!
//! Draws every linedef top-down, auto-fitted to the window, with the
//! default spawn point marked. With no argument the built-in demo room is
//! shown.

use glam::Vec2;
use minifb::{Key, Window, WindowOptions};

use linecast::world::Map;

const WIDTH: usize = 800;
const HEIGHT: usize = 800;

fn main() -> anyhow::Result<()> {
    // ─────────── load map ────────────
    let mut args = std::env::args().skip(1);
    let map = match args.next() {
        Some(path) => Map::from_file(&path)?,
        None => Map::demo(),
    };
    if map.skipped() > 0 {
        eprintln!("warning: skipped {} degenerate linedefs", map.skipped());
    }
    println!("{} linedefs", map.len());

    // ─────────── map‑space → screen‑space transform ────────────
    let (min, max) = map
        .bounds()
        .unwrap_or((Vec2::splat(-1.0), Vec2::splat(1.0)));
    let span = (max - min).max(Vec2::splat(1e-6));

    let scale = (WIDTH as f32 / span.x).min(HEIGHT as f32 / span.y) * 0.9; // 10 % margin
    let offset_x = (WIDTH as f32 - span.x * scale) / 2.0;
    let offset_y = (HEIGHT as f32 - span.y * scale) / 2.0;

    let to_screen = |v: Vec2| -> (i32, i32) {
        let sx = ((v.x - min.x) * scale + offset_x) as i32;
        let sy = HEIGHT as i32 - ((v.y - min.y) * scale + offset_y) as i32; // invert Y so north is up
        (sx, sy)
    };

    // ─────────── rasterise linedefs ────────────
    let mut buffer = vec![0u32; WIDTH * HEIGHT];
    for ld in map.linedefs() {
        let (x0, y0) = to_screen(ld.v1);
        let (x1, y1) = to_screen(ld.v2);
        draw_line(&mut buffer, WIDTH, HEIGHT, x0, y0, x1, y1, 0x00_FFFFFF);
    }

    // spawn marker (the viewer starts at the map origin)
    let (cx, cy) = to_screen(Vec2::ZERO);
    for dy in -2..=2i32 {
        for dx in -2..=2i32 {
            let (px, py) = (cx + dx, cy + dy);
            if (0..WIDTH as i32).contains(&px) && (0..HEIGHT as i32).contains(&py) {
                buffer[py as usize * WIDTH + px as usize] = 0x00_C8C800;
            }
        }
    }

    // ─────────── show window ────────────
    let mut window = Window::new("linecast map", WIDTH, HEIGHT, WindowOptions::default())?;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}

/// Integer Bresenham line‑drawing algorithm.
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}

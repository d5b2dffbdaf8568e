//! linecast — a Wolfenstein-class linedef raycaster.
//!
//! A 2-D map of wall segments is sampled once per screen column: each
//! column casts a marching ray through the map, and the first wall struck
//! becomes a distance/height/axis sample. A software rasterizer turns the
//! sample row into shaded vertical strips.
//!
//! * [`world`] — map model, camera, and the segment intersection primitive.
//! * [`engine`] — marching raycaster and per-column view projection.
//! * [`sim`] — input deltas → camera rotation + collision-clamped movement.
//! * [`renderer`] — the rasterizer behind a back-end trait.

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

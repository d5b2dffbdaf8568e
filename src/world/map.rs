//! Flat-format map loader.
//!
//! A map is an ordered list of [`Linedef`]s. The on-disk/record format is a
//! flat run of reals, **8 per linedef**:
//!
//! ```text
//! ax, ay, bx, by, height, reserved0, reserved1, reserved2
//! ```
//!
//! Only the first five are used today; the trailing three are parsed and
//! discarded so richer per-wall attribute sets can be added without breaking
//! old files. The text form (what the map editor exports) is those numbers
//! separated by commas, whitespace or square brackets, with `#` starting a
//! line comment.

use std::{fs, io, path::Path};

use glam::{Vec2, vec2};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::world::geometry::Linedef;

/// Reals per linedef record in the flat format.
pub const RECORD_LEN: usize = 8;

/// Errors that can be encountered while building a map.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The flat array does not divide into whole 8-real records.
    #[error("flat map length {0} is not a multiple of {RECORD_LEN}")]
    BadLength(usize),

    /// A token in a text map failed to parse as a real.
    #[error("bad number in map: `{0}`")]
    BadNumber(String),
}

/// Ordered, immutable collection of walls.
///
/// Order matters only for first-hit tie-breaking in the caster, never for
/// the geometry itself. There is no spatial index; every cast scans all
/// linedefs, which is fine at the map sizes the editor produces but is the
/// first thing to revisit for big maps.
#[derive(Debug, Default)]
pub struct Map {
    linedefs: Vec<Linedef>,
    skipped: usize,
}

impl Map {
    /// Build a map from an explicit linedef list (degenerates skipped).
    pub fn new(linedefs: impl IntoIterator<Item = Linedef>) -> Self {
        let mut map = Self::default();
        for ld in linedefs {
            if ld.is_degenerate() {
                map.skipped += 1;
            } else {
                map.linedefs.push(ld);
            }
        }
        map
    }

    /// Decode the flat-real format.
    ///
    /// Fails if `flat.len()` is not a multiple of 8; an empty slice yields
    /// an empty map. Zero-length linedefs are dropped (see [`Map::skipped`])
    /// rather than aborting the whole load.
    pub fn load(flat: &[f32]) -> Result<Self, MapError> {
        if flat.len() % RECORD_LEN != 0 {
            return Err(MapError::BadLength(flat.len()));
        }

        Ok(Self::new(flat.chunks_exact(RECORD_LEN).map(|rec| {
            Linedef::new(vec2(rec[0], rec[1]), vec2(rec[2], rec[3]), rec[4])
        })))
    }

    /// Load the text form from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse the text form: tokens split on commas/whitespace/brackets,
    /// `#` comments stripped per line.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        static SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s\[\]]+").unwrap());

        let mut flat = Vec::new();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or("");
            for tok in SEP.split(line).filter(|t| !t.is_empty()) {
                let v: f32 = tok
                    .parse()
                    .map_err(|_| MapError::BadNumber(tok.to_owned()))?;
                flat.push(v);
            }
        }
        Self::load(&flat)
    }

    /// The original four-wall demo room: a 4×4 square around the origin
    /// with a different relative height per wall.
    pub fn demo() -> Self {
        Self::new([
            Linedef::new(vec2(-2.0, 2.0), vec2(-2.0, -2.0), 1.0),
            Linedef::new(vec2(-2.0, 2.0), vec2(2.0, 2.0), 1.2),
            Linedef::new(vec2(2.0, 2.0), vec2(2.0, -2.0), 1.4),
            Linedef::new(vec2(2.0, -2.0), vec2(-2.0, -2.0), 2.2),
        ])
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn linedefs(&self) -> &[Linedef] {
        &self.linedefs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.linedefs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.linedefs.is_empty()
    }

    /// How many degenerate (zero-length) records the load dropped.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Axis-aligned bounds over all endpoints, or `None` for an empty map.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut it = self.linedefs.iter();
        let first = it.next()?;
        let (mut lo, mut hi) = (first.v1.min(first.v2), first.v1.max(first.v2));
        for ld in it {
            lo = lo.min(ld.v1.min(ld.v2));
            hi = hi.max(ld.v1.max(ld.v2));
        }
        Some((lo, hi))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

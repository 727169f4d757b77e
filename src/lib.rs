//! Seeded terrain map editor engine
//!
//! Generates a five-biome grid from Perlin noise keyed by a shareable seed,
//! scatters markers on sand, and applies manual paint edits while keeping the
//! markers consistent. Rendering, windowing and clipboard access are left to
//! the caller.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod markers;
pub mod noise_field;
pub mod seeds;
pub mod snapshot;
pub mod terrain;
pub mod terrain_grid;

pub use config::EditorConfig;
pub use engine::{MapEngine, PaintOutcome, Phase};
pub use error::{EditorError, Result};
pub use markers::{MarkerSeeding, MarkerSet};
pub use seeds::MapSeed;
pub use terrain::TerrainCategory;

//! Raw noise sample -> terrain category.

use crate::terrain::TerrainCategory;

/// Added to a raw sample before the thresholds are applied
pub const RECENTER_OFFSET: f64 = 0.5;

// Lower bounds (inclusive) of each band after re-centering
const SAND_MIN: f64 = 0.3;
const GRASS_MIN: f64 = 0.4;
const FOREST_MIN: f64 = 0.6;
const MOUNTAIN_MIN: f64 = 0.8;

/// Classify a raw noise sample.
///
/// Bands are inclusive-lower / exclusive-upper; anything at or above the
/// mountain threshold is Mountain. NaN fails every comparison and also lands
/// on Mountain, so the function is total.
pub fn classify(raw: f64) -> TerrainCategory {
    classify_recentered(raw + RECENTER_OFFSET)
}

/// Classify a value that has already been shifted by [`RECENTER_OFFSET`].
pub fn classify_recentered(value: f64) -> TerrainCategory {
    if value < SAND_MIN {
        TerrainCategory::Water
    } else if value < GRASS_MIN {
        TerrainCategory::Sand
    } else if value < FOREST_MIN {
        TerrainCategory::Grass
    } else if value < MOUNTAIN_MIN {
        TerrainCategory::Forest
    } else {
        TerrainCategory::Mountain
    }
}

//! The closed set of terrain categories a cell can hold.

use std::str::FromStr;

use crate::error::EditorError;

/// Terrain category of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum TerrainCategory {
    #[default]
    Water,
    Sand,
    Grass,
    Forest,
    Mountain,
}

impl TerrainCategory {
    pub fn all() -> &'static [TerrainCategory] {
        &[
            TerrainCategory::Water,
            TerrainCategory::Sand,
            TerrainCategory::Grass,
            TerrainCategory::Forest,
            TerrainCategory::Mountain,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainCategory::Water => "Water",
            TerrainCategory::Sand => "Sand",
            TerrainCategory::Grass => "Grass",
            TerrainCategory::Forest => "Forest",
            TerrainCategory::Mountain => "Mountain",
        }
    }

    /// Stable numeric code used in snapshots (row-major code sequences)
    pub fn code(&self) -> u8 {
        match self {
            TerrainCategory::Water => 0,
            TerrainCategory::Sand => 1,
            TerrainCategory::Grass => 2,
            TerrainCategory::Forest => 3,
            TerrainCategory::Mountain => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<TerrainCategory> {
        TerrainCategory::all().get(code as usize).copied()
    }

    /// Get color for rendering
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            TerrainCategory::Water => (0x1e, 0x90, 0xff),    // dodger blue
            TerrainCategory::Sand => (0xf4, 0xe1, 0x9c),
            TerrainCategory::Grass => (0x66, 0xcc, 0x66),
            TerrainCategory::Forest => (0x22, 0x8b, 0x22),   // forest green
            TerrainCategory::Mountain => (0x8b, 0x45, 0x13), // saddle brown
        }
    }

    /// Color as a `#rrggbb` string, the form UI toolkits usually take
    pub fn hex_color(&self) -> String {
        let (r, g, b) = self.color();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl std::fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TerrainCategory {
    type Err = EditorError;

    /// Accepts names case-insensitively, or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return TerrainCategory::from_code(code)
                .ok_or_else(|| EditorError::UnknownTerrain(s.to_string()));
        }
        TerrainCategory::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EditorError::UnknownTerrain(s.to_string()))
    }
}

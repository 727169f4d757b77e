//! Error type shared by the editor engine, its configuration and the CLI.

/// Errors surfaced by the editor.
///
/// Generation and painting never fail; these cover seed export, input
/// validation and configuration/serialization plumbing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// No map has been generated yet, so there is no seed to hand out.
    SeedUnavailable,
    SeedOutOfRange(u32),
    InvalidDimensions { rows: usize, cols: usize },
    InvalidNoiseParams(String),
    UnknownTerrain(String),
    Config(String),
    Serialize(String),
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::SeedUnavailable => write!(f, "No seed available: generate a map first"),
            EditorError::SeedOutOfRange(s) => {
                write!(f, "Seed {} out of range (0..={})", s, crate::seeds::MAX_SEED)
            }
            EditorError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid dimensions: {}x{}", rows, cols)
            }
            EditorError::InvalidNoiseParams(e) => write!(f, "Invalid noise parameters: {}", e),
            EditorError::UnknownTerrain(name) => write!(f, "Unknown terrain: {}", name),
            EditorError::Config(e) => write!(f, "Config error: {}", e),
            EditorError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

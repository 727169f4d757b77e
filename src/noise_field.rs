//! Coherent noise sampling for terrain generation
//!
//! Cells are sampled at `((row + offset_x) / scale, (col + offset_y) / scale)`.
//! The seed only moves the sampling window; the underlying Perlin permutation
//! is fixed, so a given seed always lands on the same patch of noise.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Permutation seed of the underlying Perlin generator. Never varies.
const PERLIN_BASE: u32 = 0;

/// Parameters for noise sampling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Cells per noise unit (higher = larger features)
    pub scale: f64,
    /// Number of noise octaves
    pub octaves: u32,
    /// Amplitude decay per octave (0.0-1.0)
    pub persistence: f64,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: 20.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(EditorError::InvalidNoiseParams(format!("scale must be positive, got {}", self.scale)));
        }
        if self.octaves == 0 {
            return Err(EditorError::InvalidNoiseParams("octaves must be at least 1".into()));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(EditorError::InvalidNoiseParams(format!(
                "persistence must be positive, got {}",
                self.persistence
            )));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(EditorError::InvalidNoiseParams(format!(
                "lacunarity must be positive, got {}",
                self.lacunarity
            )));
        }
        Ok(())
    }
}

/// A deterministic source of raw terrain samples.
///
/// Output is roughly in [-1, 1] and centered near 0; callers re-center
/// before classifying.
pub trait NoiseSource {
    fn sample(&self, row: usize, col: usize, offset_x: f64, offset_y: f64) -> f64;
}

/// Multi-octave Perlin noise field
#[derive(Clone)]
pub struct PerlinField {
    perlin: Perlin,
    params: NoiseParams,
}

impl PerlinField {
    pub fn new(params: NoiseParams) -> Self {
        Self {
            perlin: Perlin::new(PERLIN_BASE),
            params,
        }
    }
}

impl Default for PerlinField {
    fn default() -> Self {
        Self::new(NoiseParams::default())
    }
}

impl NoiseSource for PerlinField {
    fn sample(&self, row: usize, col: usize, offset_x: f64, offset_y: f64) -> f64 {
        let x = (row as f64 + offset_x) / self.params.scale;
        let y = (col as f64 + offset_y) / self.params.scale;
        fbm(
            &self.perlin,
            x,
            y,
            self.params.octaves,
            self.params.persistence,
            self.params.lacunarity,
        )
    }
}

/// Fractional Brownian Motion - multi-octave noise
fn fbm(noise: &Perlin, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += amplitude * noise.get([x * frequency, y * frequency]);
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total / max_value
}

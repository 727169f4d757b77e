//! Map seed handling
//!
//! A map seed is a small integer the user can read off the screen and share.
//! Noise offsets come straight from its digits; other systems (marker
//! placement) get their own ChaCha8 stream keyed by it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{EditorError, Result};

/// Largest valid map seed
pub const MAX_SEED: u32 = 999_999;

/// Offsets are taken modulo this value on each axis
const OFFSET_MODULUS: u32 = 10_000;

/// A validated map seed in `0..=MAX_SEED`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MapSeed(u32);

impl MapSeed {
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_SEED {
            return Err(EditorError::SeedOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Draw a uniformly distributed seed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=MAX_SEED))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Noise-space offsets: low four digits on the row axis, next four on the column axis.
    pub fn offsets(&self) -> (f64, f64) {
        let offset_x = self.0 % OFFSET_MODULUS;
        let offset_y = (self.0 / OFFSET_MODULUS) % OFFSET_MODULUS;
        (offset_x as f64, offset_y as f64)
    }

    /// ChaCha8 generator keyed by this seed, on a fixed stream per system.
    ///
    /// The output depends only on the seed and stream id, so it is stable
    /// across platforms and toolchains.
    pub fn rng_for_stream(&self, stream: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.0 as u64);
        rng.set_stream(stream);
        rng
    }
}

impl TryFrom<u32> for MapSeed {
    type Error = EditorError;

    fn try_from(value: u32) -> Result<Self> {
        MapSeed::new(value)
    }
}

impl From<MapSeed> for u32 {
    fn from(seed: MapSeed) -> u32 {
        seed.0
    }
}

impl std::fmt::Display for MapSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where new map seeds come from when the user asks for a fresh map.
pub trait SeedSource {
    fn next_seed(&mut self) -> MapSeed;
}

impl SeedSource for ChaCha8Rng {
    fn next_seed(&mut self) -> MapSeed {
        MapSeed::random(self)
    }
}

/// Always hands out the same seed.
#[derive(Clone, Copy, Debug)]
pub struct FixedSeed(pub MapSeed);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> MapSeed {
        self.0
    }
}

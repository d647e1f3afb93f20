//! Seed management for surface generation
//!
//! Provides separate seeds for each synthesis stage, so individual aspects of
//! a planet (terrain shape, waves, cloud placement) can be varied or kept
//! constant independently.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for all surface synthesis stages.
///
/// Each stage gets its own seed, derived deterministically from a master
/// seed, so regenerating with the same master reproduces the same planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Base terrain octaves (continent-scale shape)
    pub terrain: u64,
    /// High-frequency detail added by landmark roughness
    pub detail: u64,
    /// Soil-texture micro-relief patterns
    pub relief: u64,
    /// Gas-giant band and storm noise
    pub bands: u64,
    /// Liquid shell wave displacement
    pub waves: u64,
    /// Surface color jitter
    pub jitter: u64,
    /// Cloud patch placement
    pub clouds: u64,
}

impl SurfaceSeeds {
    /// Create seeds from a master seed, deriving all stage seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            terrain: derive_seed(master, "terrain"),
            detail: derive_seed(master, "detail"),
            relief: derive_seed(master, "relief"),
            bands: derive_seed(master, "bands"),
            waves: derive_seed(master, "waves"),
            jitter: derive_seed(master, "jitter"),
            clouds: derive_seed(master, "clouds"),
        }
    }
}

impl Default for SurfaceSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a stage seed from a master seed and a stage name.
/// Uses hashing to ensure different stages get different but deterministic seeds.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Display format for seeds (useful for sharing planet configurations)
impl std::fmt::Display for SurfaceSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SurfaceSeeds {{ master: {}, terrain: {}, detail: {}, relief: {}, \
             bands: {}, waves: {}, jitter: {}, clouds: {} }}",
            self.master,
            self.terrain,
            self.detail,
            self.relief,
            self.bands,
            self.waves,
            self.jitter,
            self.clouds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let seeds1 = SurfaceSeeds::from_master(12345);
        let seeds2 = SurfaceSeeds::from_master(12345);

        assert_eq!(seeds1, seeds2);
    }

    #[test]
    fn test_different_stages_get_different_seeds() {
        let seeds = SurfaceSeeds::from_master(12345);

        // Each stage should get a unique seed
        assert_ne!(seeds.terrain, seeds.detail);
        assert_ne!(seeds.detail, seeds.relief);
        assert_ne!(seeds.relief, seeds.bands);
        assert_ne!(seeds.waves, seeds.jitter);
    }

    #[test]
    fn test_different_masters_diverge() {
        let a = SurfaceSeeds::from_master(1);
        let b = SurfaceSeeds::from_master(2);

        assert_ne!(a.terrain, b.terrain);
        assert_ne!(a.jitter, b.jitter);
    }
}

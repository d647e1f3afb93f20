//! Seeded noise context threaded through all surface generators
//!
//! All coherent-noise state lives here, constructed once per generation pass
//! from [`SurfaceSeeds`]. Generators receive the context by reference; there
//! is no module-level noise state anywhere in the crate.

use glam::Vec3;
use noise::{NoiseFn, Perlin, Seedable};

use crate::seeds::SurfaceSeeds;

/// One seeded noise generator per synthesis stage
pub struct NoiseContext {
    /// Base terrain octaves
    pub terrain: Perlin,
    /// High-frequency detail (landmark roughness, mountain color variation)
    pub detail: Perlin,
    /// Soil-texture micro-relief patterns
    pub relief: Perlin,
    /// Gas-giant band, storm, and cyclone noise
    pub bands: Perlin,
    /// Liquid shell wave displacement
    pub waves: Perlin,
}

impl NoiseContext {
    pub fn new(seeds: &SurfaceSeeds) -> Self {
        Self {
            terrain: Perlin::new(1).set_seed(seeds.terrain as u32),
            detail: Perlin::new(1).set_seed(seeds.detail as u32),
            relief: Perlin::new(1).set_seed(seeds.relief as u32),
            bands: Perlin::new(1).set_seed(seeds.bands as u32),
            waves: Perlin::new(1).set_seed(seeds.waves as u32),
        }
    }
}

/// Sample 3D noise at a direction scaled by a uniform frequency.
/// Output is in [-1, 1].
pub fn sample3(noise: &Perlin, dir: Vec3, frequency: f32) -> f32 {
    let p = dir * frequency;
    noise.get([p.x as f64, p.y as f64, p.z as f64]) as f32
}

/// Sample 3D noise with a different frequency per axis (band stretching).
pub fn sample_anisotropic(noise: &Perlin, dir: Vec3, scale: Vec3) -> f32 {
    let p = dir * scale;
    noise.get([p.x as f64, p.y as f64, p.z as f64]) as f32
}

/// Multi-octave noise sum: frequency multiplied by `lacunarity` and amplitude
/// by `persistence` each octave. The octaves are summed, not averaged, so the
/// result range grows with the octave count (about [-2, 2] at 7 octaves).
pub fn fbm3(
    noise: &Perlin,
    dir: Vec3,
    octaves: u32,
    base_frequency: f32,
    persistence: f32,
    lacunarity: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = base_frequency;

    for _ in 0..octaves {
        total += amplitude * sample3(noise, dir, frequency);
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(master: u64) -> NoiseContext {
        NoiseContext::new(&SurfaceSeeds::from_master(master))
    }

    #[test]
    fn test_same_master_reproduces_samples() {
        let a = ctx(7);
        let b = ctx(7);
        let dir = Vec3::new(0.3, -0.8, 0.52).normalize();

        assert_eq!(sample3(&a.terrain, dir, 1.7), sample3(&b.terrain, dir, 1.7));
        assert_eq!(
            fbm3(&a.terrain, dir, 7, 0.6, 0.5, 2.0),
            fbm3(&b.terrain, dir, 7, 0.6, 0.5, 2.0)
        );
    }

    #[test]
    fn test_stages_are_independent() {
        let c = ctx(7);
        let dirs = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.577, 0.577, 0.577),
        ];

        // Different stage generators should not track each other
        let diverges = dirs
            .iter()
            .any(|&d| sample3(&c.terrain, d, 2.3) != sample3(&c.bands, d, 2.3));
        assert!(diverges);
    }

    #[test]
    fn test_fbm_bounded_by_amplitude_sum() {
        let c = ctx(99);
        // 7 octaves at persistence 0.5 sum to just under 2.0
        let bound = 2.0;

        for i in 0..64 {
            let t = i as f32 / 64.0;
            let dir = Vec3::new((t * 6.28).cos(), t * 2.0 - 1.0, (t * 6.28).sin()).normalize();
            let v = fbm3(&c.terrain, dir, 7, 0.6, 0.5, 2.0);
            assert!(v.is_finite());
            assert!(v.abs() <= bound);
        }
    }

    #[test]
    fn test_nearby_directions_sample_nearby_heights() {
        let c = ctx(42);
        let dir = Vec3::new(0.6, 0.3, 0.74).normalize();
        let eps = 1e-4;
        let near = (dir + Vec3::new(eps, 0.0, 0.0)).normalize();

        let a = fbm3(&c.terrain, dir, 7, 0.6, 0.5, 2.0);
        let b = fbm3(&c.terrain, near, 7, 0.6, 0.5, 2.0);
        assert!((a - b).abs() < 0.05);
    }
}

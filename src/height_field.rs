//! Height field generation and per-pass sample cache
//!
//! One generation pass samples every mesh direction once, caching results
//! under a quantized direction key. Lookups for directions outside the
//! original sample set fall back to a linear nearest-neighbor scan, which is
//! fine at mesh scale (thousands of points). The cache is immutable after
//! construction and discarded wholesale when parameters change.

use std::collections::HashMap;

use glam::Vec3;

use crate::landmarks::{accumulate, ResolvedLandmark};
use crate::noise_ctx::{fbm3, sample3, NoiseContext};
use crate::params::{PlanetKind, PlanetParameters};

// =============================================================================
// SYNTHESIS CONSTANTS
// =============================================================================

/// Octave count for terrestrial base terrain
const OCTAVES: u32 = 7;

/// Amplitude decay per octave
const PERSISTENCE: f32 = 0.5;

/// Frequency multiplier per octave
const LACUNARITY: f32 = 2.0;

/// Roughness-to-frequency gain for the first octave
const ROUGHNESS_FREQ_GAIN: f32 = 1.2;

/// How much full erosion flattens the terrain
const EROSION_DAMP: f32 = 0.3;

/// Landmark roughness detail: frequency gain and amplitude
const DETAIL_FREQ: f32 = 20.0;
const DETAIL_AMP: f32 = 0.2;

/// Gaseous path: frequency gain, amplitude, and landmark damping
const GAS_FREQ_GAIN: f32 = 2.0;
const GAS_AMP: f32 = 0.1;
const GAS_LANDMARK_DAMP: f32 = 0.5;

/// Direction keys use five decimal digits per axis
const KEY_SCALE: f32 = 100_000.0;

// =============================================================================
// RAW ELEVATION
// =============================================================================

/// Raw (unscaled) elevation at one direction for the given planet kind.
pub fn raw_height(
    ctx: &NoiseContext,
    params: &PlanetParameters,
    landmarks: &[ResolvedLandmark],
    kind: PlanetKind,
    dir: Vec3,
) -> f32 {
    let influence = accumulate(landmarks, dir);

    match kind {
        PlanetKind::Terrestrial => {
            let base_frequency = params.surface_roughness * ROUGHNESS_FREQ_GAIN;
            let mut h = fbm3(&ctx.terrain, dir, OCTAVES, base_frequency, PERSISTENCE, LACUNARITY);
            h *= params.mountain_height;
            h *= 1.0 - params.terrain_erosion * EROSION_DAMP;
            h += influence.height;
            if influence.roughness > 0.0 {
                h += sample3(&ctx.detail, dir, DETAIL_FREQ * influence.roughness)
                    * influence.roughness
                    * DETAIL_AMP;
            }
            h
        }
        PlanetKind::Gaseous => {
            let frequency = GAS_FREQ_GAIN * params.surface_roughness;
            sample3(&ctx.terrain, dir, frequency) * GAS_AMP
                + influence.height * GAS_LANDMARK_DAMP
        }
    }
}

// =============================================================================
// HEIGHT FIELD CACHE
// =============================================================================

/// Quantized unit-sphere direction, the exact-match cache key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirKey {
    x: i32,
    y: i32,
    z: i32,
}

impl DirKey {
    pub fn from_dir(dir: Vec3) -> Self {
        Self {
            x: (dir.x * KEY_SCALE).round() as i32,
            y: (dir.y * KEY_SCALE).round() as i32,
            z: (dir.z * KEY_SCALE).round() as i32,
        }
    }
}

/// Immutable per-pass elevation cache over the sampling mesh
pub struct HeightField {
    lookup: HashMap<DirKey, f32>,
    samples: Vec<(Vec3, f32)>,
}

impl HeightField {
    /// Sample every direction once and freeze the result.
    pub fn generate(
        ctx: &NoiseContext,
        params: &PlanetParameters,
        landmarks: &[ResolvedLandmark],
        kind: PlanetKind,
        dirs: &[Vec3],
    ) -> Self {
        let mut lookup = HashMap::with_capacity(dirs.len());
        let mut samples = Vec::with_capacity(dirs.len());

        for &dir in dirs {
            let h = raw_height(ctx, params, landmarks, kind, dir);
            lookup.insert(DirKey::from_dir(dir), h);
            samples.push((dir, h));
        }

        Self { lookup, samples }
    }

    /// Elevation at a direction: exact key hit, else nearest cached sample.
    /// An empty field reads as flat.
    pub fn height(&self, dir: Vec3) -> f32 {
        if let Some(&h) = self.lookup.get(&DirKey::from_dir(dir)) {
            return h;
        }

        let mut best = 0.0;
        let mut best_dist = f32::INFINITY;
        for &(sample_dir, h) in &self.samples {
            let dist = (dir - sample_dir).length_squared();
            if dist < best_dist {
                best_dist = dist;
                best = h;
            }
        }
        best
    }

    /// Exact-key lookup only
    pub fn exact(&self, dir: Vec3) -> Option<f32> {
        self.lookup.get(&DirKey::from_dir(dir)).copied()
    }

    /// All cached (direction, elevation) pairs in mesh order
    pub fn samples(&self) -> &[(Vec3, f32)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

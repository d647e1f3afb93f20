//! Surface color synthesis
//!
//! Composites the biome palette, soil tint, soil-texture tinting on mountain
//! terrain, and a per-point jitter into the final vertex color. The jitter is
//! seeded by planet identity and quantized direction, so regenerating the
//! same planet reproduces the same colors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise_ctx::{sample3, NoiseContext};
use crate::params::{PlanetKind, SoilTexture, SoilType};
use crate::terrain::TerrainType;

// =============================================================================
// COLOR TYPE
// =============================================================================

/// Linear RGB color with channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Linear interpolation toward `other` by `t` in [0, 1]
    pub fn lerp(&self, other: Rgb, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Add a per-channel offset (used by soil palette modifiers)
    pub fn shifted(&self, dr: f32, dg: f32, db: f32) -> Self {
        Self {
            r: self.r + dr,
            g: self.g + dg,
            b: self.b + db,
        }
    }

    /// Multiply all channels by a brightness factor
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Clamp every channel into [0, 1]
    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// 8-bit triple for image export
    pub fn to_u8(&self) -> [u8; 3] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.to_u8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

// =============================================================================
// SEEDED JITTER
// =============================================================================

/// Jitter half-range applied to each channel of the final color
const JITTER_RANGE: f32 = 0.05;

/// Directions are keyed at five decimal digits per axis, matching the height
/// field cache quantization.
const KEY_SCALE: f32 = 100_000.0;

fn jitter_rng(seed: u64, dir: Vec3) -> ChaCha8Rng {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    ((dir.x * KEY_SCALE).round() as i64).hash(&mut hasher);
    ((dir.y * KEY_SCALE).round() as i64).hash(&mut hasher);
    ((dir.z * KEY_SCALE).round() as i64).hash(&mut hasher);
    ChaCha8Rng::seed_from_u64(hasher.finish())
}

/// Per-point color jitter in [-0.05, 0.05] per channel, deterministic for a
/// fixed (seed, direction) pair.
pub fn color_jitter(seed: u64, dir: Vec3) -> (f32, f32, f32) {
    let mut rng = jitter_rng(seed, dir);
    (
        rng.gen_range(-JITTER_RANGE..=JITTER_RANGE),
        rng.gen_range(-JITTER_RANGE..=JITTER_RANGE),
        rng.gen_range(-JITTER_RANGE..=JITTER_RANGE),
    )
}

// =============================================================================
// SURFACE COLOR PIPELINE
// =============================================================================

/// Noise frequency for mountain brightness micro-variation
const MICRO_VARIATION_FREQ: f32 = 50.0;

/// Noise frequencies for the texture-specific mountain tints
const CRYSTAL_TINT_FREQ: f32 = 40.0;
const CRACK_TINT_FREQ: f32 = 30.0;
const LAYER_TINT_FREQ: f32 = 5.0;

/// Synthesize the final color for one surface point.
///
/// `palette` is the resolved 4-slot biome palette (see `biomes::resolve_palette`),
/// already carrying any soil palette modifier.
pub fn surface_color(
    ctx: &NoiseContext,
    jitter_seed: u64,
    dir: Vec3,
    terrain: TerrainType,
    palette: &[Rgb; 4],
    soil_type: SoilType,
    soil_texture: SoilTexture,
    kind: PlanetKind,
) -> Rgb {
    let mut color = palette[terrain.palette_slot()];

    // Soil tint only applies where there is actual soil
    if kind == PlanetKind::Terrestrial {
        color = color.lerp(soil_type.reference_color(), terrain.soil_blend_ratio());
    }

    if terrain == TerrainType::Mountain {
        color = mountain_tint(ctx, dir, color, soil_texture);
    }

    let (jr, jg, jb) = color_jitter(jitter_seed, dir);
    color.shifted(jr, jg, jb).clamped()
}

/// High-relief points get a brightness micro-variation plus a texture tint.
fn mountain_tint(ctx: &NoiseContext, dir: Vec3, color: Rgb, texture: SoilTexture) -> Rgb {
    let micro = sample3(&ctx.detail, dir, MICRO_VARIATION_FREQ);
    let mut color = if micro > 0.5 {
        color.scaled(0.9)
    } else if micro < -0.5 {
        color.scaled(1.1)
    } else {
        color
    };

    color = match texture {
        SoilTexture::Crystalline => {
            if sample3(&ctx.detail, dir, CRYSTAL_TINT_FREQ) > 0.7 {
                color.shifted(0.1, 0.1, 0.1)
            } else {
                color
            }
        }
        SoilTexture::Cracked => {
            if sample3(&ctx.detail, dir, CRACK_TINT_FREQ).abs() < 0.05 {
                color.scaled(0.8)
            } else {
                color
            }
        }
        SoilTexture::Layered => {
            if (sample3(&ctx.detail, dir, LAYER_TINT_FREQ) * 20.0).sin() > 0.8 {
                color.shifted(0.05, 0.05, 0.05)
            } else {
                color
            }
        }
        // Smooth, rough, porous, grainy only shape the relief, not the tint
        _ => color,
    };

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::SurfaceSeeds;

    fn ctx() -> NoiseContext {
        NoiseContext::new(&SurfaceSeeds::from_master(42))
    }

    const GRAY: [Rgb; 4] = [
        Rgb::new(0.2, 0.2, 0.2),
        Rgb::new(0.4, 0.4, 0.4),
        Rgb::new(0.6, 0.6, 0.6),
        Rgb::new(0.8, 0.8, 0.8),
    ];

    #[test]
    fn test_from_hex_unpacks_channels() {
        let c = Rgb::from_hex(0x1E78B4);
        assert!((c.r - 30.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 120.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 180.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0.0, 0.5, 1.0);
        let b = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_display_formats_hex() {
        assert_eq!(Rgb::from_hex(0x90EE90).to_string(), "#90EE90");
    }

    #[test]
    fn test_jitter_is_deterministic_per_direction() {
        let dir = Vec3::new(0.3, 0.5, -0.81).normalize();
        assert_eq!(color_jitter(9, dir), color_jitter(9, dir));
        assert_ne!(color_jitter(9, dir), color_jitter(10, dir));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        for i in 0..100 {
            let t = i as f32 * 0.0628;
            let dir = Vec3::new(t.cos(), (t * 0.7).sin(), t.sin()).normalize();
            let (r, g, b) = color_jitter(1234, dir);
            assert!(r.abs() <= JITTER_RANGE);
            assert!(g.abs() <= JITTER_RANGE);
            assert!(b.abs() <= JITTER_RANGE);
        }
    }

    #[test]
    fn test_surface_color_channels_stay_in_unit_range() {
        let ctx = ctx();
        let white = [Rgb::new(1.0, 1.0, 1.0); 4];
        let black = [Rgb::new(0.0, 0.0, 0.0); 4];

        for i in 0..200 {
            let t = i as f32 * 0.0314;
            let dir = Vec3::new(t.cos(), (t * 1.3).sin(), (t * 0.7).cos()).normalize();
            for &terrain in TerrainType::all() {
                for palette in [&white, &black] {
                    let c = surface_color(
                        &ctx,
                        77,
                        dir,
                        terrain,
                        palette,
                        SoilType::Volcanic,
                        SoilTexture::Crystalline,
                        PlanetKind::Terrestrial,
                    );
                    assert!((0.0..=1.0).contains(&c.r));
                    assert!((0.0..=1.0).contains(&c.g));
                    assert!((0.0..=1.0).contains(&c.b));
                }
            }
        }
    }

    #[test]
    fn test_lowland_color_is_soil_blend_plus_jitter() {
        let ctx = ctx();
        let dir = Vec3::new(0.0, 1.0, 0.0);
        let c = surface_color(
            &ctx,
            5,
            dir,
            TerrainType::Regular,
            &GRAY,
            SoilType::Rocky,
            SoilTexture::Rough,
            PlanetKind::Terrestrial,
        );
        let expected = GRAY[2].lerp(SoilType::Rocky.reference_color(), 0.7);

        assert!((c.r - expected.r).abs() <= JITTER_RANGE + 1e-6);
        assert!((c.g - expected.g).abs() <= JITTER_RANGE + 1e-6);
        assert!((c.b - expected.b).abs() <= JITTER_RANGE + 1e-6);
    }

    #[test]
    fn test_gaseous_skips_soil_blend() {
        let ctx = ctx();
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let c = surface_color(
            &ctx,
            5,
            dir,
            TerrainType::Regular,
            &GRAY,
            SoilType::Organic,
            SoilTexture::Rough,
            PlanetKind::Gaseous,
        );

        assert!((c.r - GRAY[2].r).abs() <= JITTER_RANGE + 1e-6);
        assert!((c.g - GRAY[2].g).abs() <= JITTER_RANGE + 1e-6);
        assert!((c.b - GRAY[2].b).abs() <= JITTER_RANGE + 1e-6);
    }

    #[test]
    fn test_surface_color_reproducible() {
        let ctx = ctx();
        let dir = Vec3::new(0.48, -0.6, 0.64).normalize();
        let once = surface_color(
            &ctx,
            11,
            dir,
            TerrainType::Mountain,
            &GRAY,
            SoilType::Dusty,
            SoilTexture::Layered,
            PlanetKind::Terrestrial,
        );
        let twice = surface_color(
            &ctx,
            11,
            dir,
            TerrainType::Mountain,
            &GRAY,
            SoilType::Dusty,
            SoilTexture::Layered,
            PlanetKind::Terrestrial,
        );
        assert_eq!(once, twice);
    }
}

//! Soil-texture micro-relief
//!
//! Small elevation detail carved out of high ground before classification,
//! patterned after the soil texture. Each texture has a characteristic noise
//! scale and carve depth.

use glam::Vec3;

use crate::noise_ctx::{sample3, NoiseContext};
use crate::params::{SoilTexture, SoilType};

/// Noise scale and carve depth for one soil texture
pub fn texture_profile(texture: SoilTexture) -> (f32, f32) {
    match texture {
        SoilTexture::Smooth => (5.0, 0.01),
        SoilTexture::Rough => (15.0, 0.05),
        SoilTexture::Cracked => (20.0, 0.08),
        SoilTexture::Layered => (12.0, 0.04),
        SoilTexture::Porous => (25.0, 0.06),
        SoilTexture::Grainy => (30.0, 0.03),
        SoilTexture::Crystalline => (18.0, 0.07),
    }
}

/// Soil-type gain on the carve depth
pub fn soil_detail_multiplier(soil: SoilType) -> f32 {
    match soil {
        SoilType::Volcanic => 1.5,
        SoilType::Sandy => 0.7,
        _ => 1.0,
    }
}

/// Micro-relief detail at one direction, to be subtracted from the scaled
/// elevation of high ground. `irregularity` is the planet's surface roughness
/// and only shapes the default pattern.
pub fn texture_detail(
    ctx: &NoiseContext,
    dir: Vec3,
    texture: SoilTexture,
    soil: SoilType,
    irregularity: f32,
) -> f32 {
    let (scale, depth) = texture_profile(texture);

    let detail = match texture {
        SoilTexture::Cracked => {
            // Two crack networks at different scales
            let mut d = 0.0;
            if sample3(&ctx.relief, dir, scale * 2.0).abs() < 0.1 {
                d += 1.5 * depth;
            }
            if sample3(&ctx.relief, dir, scale * 5.0).abs() < 0.05 {
                d += 0.8 * depth;
            }
            d
        }
        SoilTexture::Layered => (sample3(&ctx.relief, dir, scale * 0.5) * 20.0).sin() * 0.8 * depth,
        SoilTexture::Crystalline => {
            if sample3(&ctx.relief, dir, scale * 3.0).abs() > 0.7 {
                1.2 * depth
            } else {
                0.0
            }
        }
        SoilTexture::Porous => {
            if sample3(&ctx.relief, dir, scale * 4.0) > 0.8 {
                1.5 * depth
            } else {
                0.0
            }
        }
        SoilTexture::Grainy => {
            sample3(&ctx.relief, dir, scale * 8.0) * sample3(&ctx.relief, dir, scale * 12.0) * depth
        }
        SoilTexture::Smooth | SoilTexture::Rough => {
            sample3(&ctx.relief, dir, scale) * depth * irregularity
        }
    };

    detail * soil_detail_multiplier(soil)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::SurfaceSeeds;

    fn ctx() -> NoiseContext {
        NoiseContext::new(&SurfaceSeeds::from_master(42))
    }

    fn sphere_dirs(n: usize) -> Vec<Vec3> {
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                Vec3::new(
                    (t * 12.9).cos(),
                    t * 2.0 - 1.0,
                    (t * 7.3).sin(),
                )
                .normalize()
            })
            .collect()
    }

    #[test]
    fn test_profile_table() {
        assert_eq!(texture_profile(SoilTexture::Smooth), (5.0, 0.01));
        assert_eq!(texture_profile(SoilTexture::Cracked), (20.0, 0.08));
        assert_eq!(texture_profile(SoilTexture::Crystalline), (18.0, 0.07));
    }

    #[test]
    fn test_detail_stays_bounded() {
        let ctx = ctx();
        // Largest possible carve is the cracked double network (2.3x depth)
        for &texture in SoilTexture::all() {
            let (_, depth) = texture_profile(texture);
            let bound = 2.3 * depth * 1.5 + 1e-6;
            for dir in sphere_dirs(100) {
                let d = texture_detail(&ctx, dir, texture, SoilType::Volcanic, 0.8);
                assert!(d.is_finite());
                assert!(d.abs() <= bound, "{texture} detail {d} out of bound");
            }
        }
    }

    #[test]
    fn test_volcanic_amplifies_and_sandy_dampens() {
        let ctx = ctx();
        for dir in sphere_dirs(30) {
            let rocky = texture_detail(&ctx, dir, SoilTexture::Rough, SoilType::Rocky, 0.5);
            let volcanic = texture_detail(&ctx, dir, SoilTexture::Rough, SoilType::Volcanic, 0.5);
            let sandy = texture_detail(&ctx, dir, SoilTexture::Rough, SoilType::Sandy, 0.5);
            assert!((volcanic - rocky * 1.5).abs() < 1e-6);
            assert!((sandy - rocky * 0.7).abs() < 1e-6);
        }
    }

    #[test]
    fn test_smooth_carves_less_than_cracked() {
        let ctx = ctx();
        let total = |texture: SoilTexture| -> f32 {
            sphere_dirs(200)
                .into_iter()
                .map(|d| texture_detail(&ctx, d, texture, SoilType::Rocky, 1.0).abs())
                .sum()
        };
        assert!(total(SoilTexture::Smooth) < total(SoilTexture::Cracked));
    }

    #[test]
    fn test_detail_deterministic() {
        let a = ctx();
        let b = ctx();
        let dir = Vec3::new(0.26, 0.72, -0.64).normalize();
        assert_eq!(
            texture_detail(&a, dir, SoilTexture::Grainy, SoilType::Dusty, 0.4),
            texture_detail(&b, dir, SoilTexture::Grainy, SoilType::Dusty, 0.4)
        );
    }
}

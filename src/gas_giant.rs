//! Gas-giant banding
//!
//! Gas giants replace the terrain pipeline with horizontal banding, storm
//! cells, and a temperature-keyed stripe palette. Landmarks still apply but
//! at half strength; a storm system perturbs bands rather than carving rock.

use glam::Vec3;

use crate::color::Rgb;
use crate::landmarks::{accumulate, ResolvedLandmark};
use crate::noise_ctx::{sample_anisotropic, NoiseContext};

// =============================================================================
// BAND ELEVATION
// =============================================================================

/// Latitude frequency of the main bands
const BAND_FREQ: f32 = 10.0;
const BAND_AMP: f32 = 0.5;

/// Storm cells are stretched along latitude
const STORM_SCALE: Vec3 = Vec3::new(2.0, 8.0, 2.0);
const STORM_AMP: f32 = 0.5;

/// Cyclone streaks run the other way
const CYCLONE_SCALE: Vec3 = Vec3::new(4.0, 1.0, 4.0);
const CYCLONE_AMP: f32 = 0.25;

/// Landmarks press half as hard into an atmosphere as into crust
const LANDMARK_DAMP: f32 = 0.5;

/// Band-pattern elevation at one direction: even blend of latitude bands and
/// storm noise, plus cyclone streaks and damped landmark influence.
pub fn band_elevation(ctx: &NoiseContext, landmarks: &[ResolvedLandmark], dir: Vec3) -> f32 {
    let bands = (dir.y * BAND_FREQ).sin() * BAND_AMP;
    let storms = sample_anisotropic(&ctx.bands, dir, STORM_SCALE) * STORM_AMP;
    let cyclones = sample_anisotropic(&ctx.bands, dir, CYCLONE_SCALE) * CYCLONE_AMP;

    let mixed = bands + (storms - bands) * 0.5;
    mixed + cyclones + accumulate(landmarks, dir).height * LANDMARK_DAMP
}

// =============================================================================
// BAND PALETTE
// =============================================================================

/// Latitude frequency of the color stripes
const STRIPE_FREQ: f32 = 20.0;

/// Stripe selector threshold
const STRIPE_EDGE: f32 = 0.3;

/// Three-stop stripe palette keyed by temperature
pub fn palette_for_temperature(temperature: f32) -> [Rgb; 3] {
    let hex: [u32; 3] = if temperature < 100.0 {
        // Frigid: ice blues
        [0x4682B4, 0x1E90FF, 0x00BFFF]
    } else if temperature > 300.0 {
        // Hot: dusky reds
        [0xCD5C5C, 0xF08080, 0xFA8072]
    } else {
        // Temperate: ammonia greens
        [0x9ACD32, 0x6B8E23, 0x556B2F]
    };
    [
        Rgb::from_hex(hex[0]),
        Rgb::from_hex(hex[1]),
        Rgb::from_hex(hex[2]),
    ]
}

/// Stripe color at one direction
pub fn band_color(dir: Vec3, temperature: f32) -> Rgb {
    let palette = palette_for_temperature(temperature);
    let stripe = (dir.y * STRIPE_FREQ).sin();
    if stripe > STRIPE_EDGE {
        palette[0]
    } else if stripe < -STRIPE_EDGE {
        palette[2]
    } else {
        palette[1]
    }
}

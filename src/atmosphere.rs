//! Atmosphere shell and cloud placement
//!
//! The atmosphere is a tinted translucent shell just above the surface;
//! clouds are a bounded set of small patches placed by seeded spherical
//! sampling so a planet's sky is stable across regenerations.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::color::Rgb;
use crate::params::{PlanetKind, PlanetParameters};

// =============================================================================
// ATMOSPHERE KIND
// =============================================================================

/// Dominant atmosphere composition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtmosphereKind {
    /// Water-vapor rich sky
    WaterRich,
    /// Carbon dioxide haze
    CarbonDioxide,
    /// Methane tint
    Methane,
    /// Ice-crystal haze
    Snow,
    /// Trace atmosphere
    None,
}

impl AtmosphereKind {
    pub fn all() -> &'static [Self] {
        &[
            Self::WaterRich,
            Self::CarbonDioxide,
            Self::Methane,
            Self::Snow,
            Self::None,
        ]
    }

    /// Composition assumed when the caller does not specify one
    pub fn default_for_temperature(temperature: f32) -> Self {
        if temperature >= 273.0 {
            Self::WaterRich
        } else if temperature >= 150.0 {
            Self::CarbonDioxide
        } else if temperature >= 100.0 {
            Self::Methane
        } else {
            Self::None
        }
    }

    pub fn reference_color(&self) -> Rgb {
        match self {
            Self::WaterRich => Rgb::from_hex(0x87CEEB),
            Self::CarbonDioxide => Rgb::from_hex(0xD3D3D3),
            Self::Methane => Rgb::from_hex(0x9ACD32),
            Self::Snow => Rgb::from_hex(0xF0F8FF),
            Self::None => Rgb::from_hex(0xADD8E6),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WaterRich => "Water vapor and nitrogen",
            Self::CarbonDioxide => "Carbon dioxide haze",
            Self::Methane => "Methane-tinted sky",
            Self::Snow => "Suspended ice crystals",
            Self::None => "Trace gases only",
        }
    }
}

impl std::fmt::Display for AtmosphereKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WaterRich => write!(f, "water-rich"),
            Self::CarbonDioxide => write!(f, "carbon-dioxide"),
            Self::Methane => write!(f, "methane"),
            Self::Snow => write!(f, "snow"),
            Self::None => write!(f, "none"),
        }
    }
}

// =============================================================================
// ATMOSPHERE LAYER
// =============================================================================

/// Atmosphere shell sits 5% above the surface
const ATMOSPHERE_SHELL_GAIN: f32 = 1.05;

/// Opacity per unit of atmosphere strength on terrestrial planets
const OPACITY_GAIN: f32 = 0.4;

/// Fixed white haze opacity on gas giants
const GASEOUS_HAZE_OPACITY: f32 = 0.15;

/// Temperature edges for the cold/hot color shifts
const COLD_SHIFT_BELOW: f32 = 200.0;
const HOT_SHIFT_ABOVE: f32 = 350.0;

/// Shift targets: steel blue when frigid, light salmon when scorched
const COLD_TARGET: u32 = 0x4682B4;
const HOT_TARGET: u32 = 0xFFA07A;

/// Resolved atmosphere parameters for one planet
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AtmosphereLayer {
    pub kind: AtmosphereKind,
    pub color: Rgb,
    pub opacity: f32,
    /// Shell sphere radius in planet-radius units
    pub shell_radius: f32,
}

impl AtmosphereLayer {
    /// Derive the atmosphere from planet parameters.
    pub fn generate(params: &PlanetParameters) -> Self {
        let kind = params
            .atmosphere
            .unwrap_or_else(|| AtmosphereKind::default_for_temperature(params.temperature));

        let (color, opacity) = match params.kind() {
            PlanetKind::Terrestrial => {
                let mut color = kind.reference_color();
                if params.temperature < COLD_SHIFT_BELOW {
                    color = color.lerp(Rgb::from_hex(COLD_TARGET), 0.3);
                } else if params.temperature > HOT_SHIFT_ABOVE {
                    color = color.lerp(Rgb::from_hex(HOT_TARGET), 0.3);
                }
                let opacity = params.atmosphere_strength.clamp(0.0, 1.0) * OPACITY_GAIN;
                (color.clamped(), opacity)
            }
            // Gas giants are all atmosphere already; they get a plain haze
            PlanetKind::Gaseous => (Rgb::new(1.0, 1.0, 1.0), GASEOUS_HAZE_OPACITY),
        };

        Self {
            kind,
            color,
            opacity,
            shell_radius: params.radius * ATMOSPHERE_SHELL_GAIN,
        }
    }

    /// Whether the shell contributes anything visible
    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }
}

// =============================================================================
// CLOUDS
// =============================================================================

/// Hard cap on rendered cloud patches
pub const MAX_CLOUDS: u32 = 100;

/// Cloud layer sits 2% above the surface
const CLOUD_SHELL_GAIN: f32 = 1.02;

/// Patch size range
const CLOUD_SIZE_MIN: f32 = 0.05;
const CLOUD_SIZE_SPAN: f32 = 0.15;

/// One cloud patch: a direction on the unit sphere plus a patch size
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CloudPlacement {
    pub direction: [f32; 3],
    pub size: f32,
}

impl CloudPlacement {
    pub fn direction_vec(&self) -> Vec3 {
        Vec3::from_array(self.direction)
    }

    /// World position of the patch center for a planet of the given radius
    pub fn position(&self, radius: f32) -> Vec3 {
        self.direction_vec() * radius * CLOUD_SHELL_GAIN
    }
}

/// Place cloud patches for a planet. Only terrestrial planets get discrete
/// clouds; the count is clamped to [`MAX_CLOUDS`]. Placement is seeded, so the
/// same planet always gets the same sky.
pub fn generate_clouds(params: &PlanetParameters, seed: u64) -> Vec<CloudPlacement> {
    if params.kind() != PlanetKind::Terrestrial {
        return Vec::new();
    }

    let count = params.cloud_count.min(MAX_CLOUDS);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut clouds = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let phi = rng.gen::<f32>() * TAU;
        let theta = rng.gen::<f32>() * PI;
        let direction = Vec3::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        );
        clouds.push(CloudPlacement {
            direction: direction.to_array(),
            size: CLOUD_SIZE_MIN + rng.gen::<f32>() * CLOUD_SIZE_SPAN,
        });
    }

    clouds
}

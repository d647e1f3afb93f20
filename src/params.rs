//! Planet parameters and planet-kind classification
//!
//! The parameter struct is the single input to surface synthesis. Every field
//! has a documented default so partially specified planets still generate.

use std::f32::consts::PI;

use crate::atmosphere::AtmosphereKind;
use crate::color::Rgb;
use crate::landmarks::Landmark;
use crate::liquid::LiquidKind;

// =============================================================================
// PLANET KIND
// =============================================================================

/// Density threshold separating terrestrial from gaseous planets (g/cm3-like units)
pub const DENSITY_THRESHOLD: f32 = 1.0;

/// Broad planet category, driving which synthesis path runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetKind {
    /// Solid surface: full terrain, soil, and liquid pipeline
    #[default]
    Terrestrial,
    /// No solid surface: banding and storm pipeline
    Gaseous,
}

impl PlanetKind {
    pub fn all() -> &'static [Self] {
        &[Self::Terrestrial, Self::Gaseous]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Terrestrial => "Solid surface with terrain and soil",
            Self::Gaseous => "Gas giant with bands and storms",
        }
    }
}

impl std::fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terrestrial => write!(f, "terrestrial"),
            Self::Gaseous => write!(f, "gaseous"),
        }
    }
}

// =============================================================================
// SOIL
// =============================================================================

/// Dominant surface soil composition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    #[default]
    Rocky,
    Sandy,
    Volcanic,
    Organic,
    Dusty,
    Frozen,
    Muddy,
}

impl SoilType {
    pub fn all() -> &'static [Self] {
        &[
            Self::Rocky,
            Self::Sandy,
            Self::Volcanic,
            Self::Organic,
            Self::Dusty,
            Self::Frozen,
            Self::Muddy,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Rocky => "Bare rock and regolith",
            Self::Sandy => "Loose fine-grained sand",
            Self::Volcanic => "Dark basaltic ash and lava rock",
            Self::Organic => "Soil rich in organic matter",
            Self::Dusty => "Fine oxidized dust cover",
            Self::Frozen => "Permafrost and surface ice",
            Self::Muddy => "Waterlogged sediment",
        }
    }

    /// Reference color blended into the biome palette per terrain slot
    pub fn reference_color(&self) -> Rgb {
        match self {
            Self::Rocky => Rgb::from_hex(0xB39980),
            Self::Sandy => Rgb::from_hex(0xD2B48C),
            Self::Volcanic => Rgb::from_hex(0x3A3A3A),
            Self::Organic => Rgb::from_hex(0x4D8C57),
            Self::Dusty => Rgb::from_hex(0xA0522D),
            Self::Frozen => Rgb::from_hex(0xE0FFFF),
            Self::Muddy => Rgb::from_hex(0x614126),
        }
    }

    /// Small per-channel shift applied to the biome base palette before blending
    pub fn palette_modifier(&self) -> (f32, f32, f32) {
        match self {
            Self::Rocky => (0.0, -0.05, -0.05),
            Self::Sandy => (0.10, 0.05, -0.10),
            Self::Volcanic => (-0.10, -0.10, -0.10),
            Self::Organic => (-0.10, 0.10, -0.10),
            Self::Dusty => (0.05, 0.0, -0.05),
            Self::Frozen => (-0.05, 0.0, 0.10),
            Self::Muddy => (-0.05, -0.05, -0.10),
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rocky => write!(f, "rocky"),
            Self::Sandy => write!(f, "sandy"),
            Self::Volcanic => write!(f, "volcanic"),
            Self::Organic => write!(f, "organic"),
            Self::Dusty => write!(f, "dusty"),
            Self::Frozen => write!(f, "frozen"),
            Self::Muddy => write!(f, "muddy"),
        }
    }
}

impl std::str::FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocky" => Ok(Self::Rocky),
            "sandy" => Ok(Self::Sandy),
            "volcanic" => Ok(Self::Volcanic),
            "organic" => Ok(Self::Organic),
            "dusty" => Ok(Self::Dusty),
            "frozen" => Ok(Self::Frozen),
            "muddy" => Ok(Self::Muddy),
            other => Err(format!("unknown soil type '{}'", other)),
        }
    }
}

/// Fine-scale soil surface structure, driving micro-relief and mountain tinting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilTexture {
    Smooth,
    #[default]
    Rough,
    Cracked,
    Layered,
    Porous,
    Grainy,
    Crystalline,
}

impl SoilTexture {
    pub fn all() -> &'static [Self] {
        &[
            Self::Smooth,
            Self::Rough,
            Self::Cracked,
            Self::Layered,
            Self::Porous,
            Self::Grainy,
            Self::Crystalline,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Smooth => "Even surface with little detail",
            Self::Rough => "Irregular broken ground",
            Self::Cracked => "Polygonal fracture networks",
            Self::Layered => "Stratified sedimentary banding",
            Self::Porous => "Pitted, sponge-like surface",
            Self::Grainy => "Dense granular speckling",
            Self::Crystalline => "Faceted crystal growth",
        }
    }
}

impl std::fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Smooth => write!(f, "smooth"),
            Self::Rough => write!(f, "rough"),
            Self::Cracked => write!(f, "cracked"),
            Self::Layered => write!(f, "layered"),
            Self::Porous => write!(f, "porous"),
            Self::Grainy => write!(f, "grainy"),
            Self::Crystalline => write!(f, "crystalline"),
        }
    }
}

impl std::str::FromStr for SoilTexture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(Self::Smooth),
            "rough" => Ok(Self::Rough),
            "cracked" => Ok(Self::Cracked),
            "layered" => Ok(Self::Layered),
            "porous" => Ok(Self::Porous),
            "grainy" => Ok(Self::Grainy),
            "crystalline" => Ok(Self::Crystalline),
            other => Err(format!("unknown soil texture '{}'", other)),
        }
    }
}

// =============================================================================
// PLANET PARAMETERS
// =============================================================================

/// Full input description of a planet surface.
///
/// Missing fields in serialized form fall back to the documented defaults, so
/// a params file only needs to name what differs from the baseline world.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlanetParameters {
    /// Planet mass (Earth masses)
    pub mass: f32,
    /// Planet radius (Earth radii); also the base radius of the render sphere
    pub radius: f32,
    /// Mean surface temperature in Kelvin
    pub temperature: f32,
    /// Biome name, looked up in the palette table ("Rocky Highlands" etc.)
    pub biome: String,
    /// Dominant soil composition
    pub soil_type: SoilType,
    /// Fine-scale soil structure
    pub soil_texture: SoilTexture,
    /// Overall terrain noisiness multiplier
    pub surface_roughness: f32,
    /// Vertical exaggeration of terrain relief
    pub mountain_height: f32,
    /// How much erosion flattens the terrain (0 = none)
    pub terrain_erosion: f32,
    /// Liquid coverage level, 0 (dry) to 1 (flooded)
    pub water_level: f32,
    /// Explicit liquid type; derived from temperature when absent
    pub liquid_type: Option<LiquidKind>,
    /// Set false to suppress the liquid shell regardless of water level
    pub liquid_enabled: bool,
    /// Liquid salinity, 0 to 1 (water color only)
    pub salinity: f32,
    /// Requested cloud patch count (clamped to 100 at generation)
    pub cloud_count: u32,
    /// Atmosphere density, 0 (none) to 1 (thick)
    pub atmosphere_strength: f32,
    /// Atmosphere composition; derived from temperature when absent
    pub atmosphere: Option<AtmosphereKind>,
    /// Explicit planet-kind override; otherwise derived from density
    pub kind_override: Option<PlanetKind>,
    /// Caller palette replacing the biome table lookup wholesale
    pub custom_palette: Option<[Rgb; 4]>,
    /// Localized surface features (read-only inputs)
    pub landmarks: Vec<Landmark>,
    /// Master seed; planet identity for all derived randomness
    pub seed: u64,
}

impl Default for PlanetParameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 1.0,
            temperature: 288.0,
            biome: "Rocky Highlands".to_string(),
            soil_type: SoilType::Rocky,
            soil_texture: SoilTexture::Rough,
            surface_roughness: 0.5,
            mountain_height: 0.5,
            terrain_erosion: 0.5,
            water_level: 0.3,
            liquid_type: None,
            liquid_enabled: true,
            salinity: 0.5,
            cloud_count: 50,
            atmosphere_strength: 0.5,
            atmosphere: None,
            kind_override: None,
            custom_palette: None,
            landmarks: Vec::new(),
            seed: 0,
        }
    }
}

impl PlanetParameters {
    /// Mean density in units where 1.0 is the terrestrial/gaseous boundary
    pub fn density(&self) -> f32 {
        let volume = (4.0 / 3.0) * PI * self.radius.powi(3);
        if volume > 0.0 {
            self.mass / volume
        } else {
            f32::INFINITY
        }
    }

    /// Planet kind: explicit override wins, otherwise the density rule
    pub fn kind(&self) -> PlanetKind {
        if let Some(kind) = self.kind_override {
            return kind;
        }
        if self.density() > DENSITY_THRESHOLD {
            PlanetKind::Terrestrial
        } else {
            PlanetKind::Gaseous
        }
    }

    /// Roughness relative to the 0.5 baseline, used to scale displacement
    pub fn roughness_multiplier(&self) -> f32 {
        self.surface_roughness / 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_planet_is_terrestrial() {
        let params = PlanetParameters {
            mass: 10.0,
            ..Default::default()
        };
        assert!(params.density() > DENSITY_THRESHOLD);
        assert_eq!(params.kind(), PlanetKind::Terrestrial);
    }

    #[test]
    fn test_unit_mass_unit_radius_derives_gaseous() {
        // mass 1, radius 1 => density 1/(4/3 pi) ~ 0.24, under the threshold
        let params = PlanetParameters::default();
        assert_eq!(params.kind(), PlanetKind::Gaseous);
    }

    #[test]
    fn test_low_density_is_gaseous() {
        let params = PlanetParameters {
            mass: 1.0,
            radius: 4.0,
            ..Default::default()
        };
        assert_eq!(params.kind(), PlanetKind::Gaseous);
    }

    #[test]
    fn test_kind_override_wins_over_density() {
        let params = PlanetParameters {
            mass: 1000.0,
            radius: 1.0,
            kind_override: Some(PlanetKind::Gaseous),
            ..Default::default()
        };
        assert_eq!(params.kind(), PlanetKind::Gaseous);
    }

    #[test]
    fn test_zero_radius_degrades_to_terrestrial() {
        let params = PlanetParameters {
            radius: 0.0,
            ..Default::default()
        };
        assert_eq!(params.kind(), PlanetKind::Terrestrial);
    }

    #[test]
    fn test_params_roundtrip_through_json() {
        let params = PlanetParameters {
            temperature: 150.0,
            biome: "Frozen Wastes".to_string(),
            soil_type: SoilType::Frozen,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: PlanetParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.temperature, 150.0);
        assert_eq!(back.soil_type, SoilType::Frozen);
        assert_eq!(back.biome, "Frozen Wastes");
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let back: PlanetParameters = serde_json::from_str(r#"{"temperature": 300.0}"#).unwrap();
        assert_eq!(back.temperature, 300.0);
        assert_eq!(back.water_level, 0.3);
        assert_eq!(back.soil_texture, SoilTexture::Rough);
        assert!(back.liquid_enabled);
    }

    #[test]
    fn test_soil_names_parse_case_insensitively() {
        assert_eq!("volcanic".parse::<SoilType>(), Ok(SoilType::Volcanic));
        assert_eq!(" Cracked ".parse::<SoilTexture>(), Ok(SoilTexture::Cracked));
        assert!("lava".parse::<SoilType>().is_err());
    }
}

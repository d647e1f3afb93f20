//! Terrain classification from scaled elevation
//!
//! Elevation bands are fixed constants of the model. Callers pass the
//! displacement-scaled elevation (see [`scale_elevation`]), not raw noise.

use crate::params::PlanetKind;

// =============================================================================
// CLASSIFICATION BANDS
// =============================================================================

/// Below this scaled elevation a point is ocean floor
pub const OCEAN_FLOOR_MAX: f32 = -0.05;

/// Upper bound of the beach band (exclusive)
pub const BEACH_MAX: f32 = 0.0;

/// Upper bound of regular lowland (exclusive); above is mountain
pub const REGULAR_MAX: f32 = 0.05;

/// Scaled elevation above which soil micro-relief is carved out
pub const RELIEF_THRESHOLD: f32 = 0.05;

/// Height-to-displacement factor for terrestrial planets
pub const DISTORTION_TERRESTRIAL: f32 = 0.08;

/// Height-to-displacement factor for gaseous planets (softer banding)
pub const DISTORTION_GASEOUS: f32 = 0.05;

/// Overall displacement gain applied after distortion and roughness
const DISPLACEMENT_GAIN: f32 = 1.5;

// =============================================================================
// TERRAIN TYPE
// =============================================================================

/// Discrete terrain category for one surface point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TerrainType {
    /// Deep depressions, typically below the liquid shell
    OceanFloor,
    /// Narrow transitional band around the zero elevation line
    Beach,
    /// Ordinary lowland terrain
    Regular,
    /// High relief terrain, gets micro-variation and texture tinting
    Mountain,
}

impl TerrainType {
    pub fn all() -> &'static [Self] {
        &[Self::OceanFloor, Self::Beach, Self::Regular, Self::Mountain]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OceanFloor => "Deep basin floor",
            Self::Beach => "Shoreline transition band",
            Self::Regular => "Lowland plains",
            Self::Mountain => "High relief terrain",
        }
    }

    /// Index of this category's slot in a biome palette
    pub fn palette_slot(&self) -> usize {
        match self {
            Self::OceanFloor => 0,
            Self::Beach => 1,
            Self::Regular => 2,
            Self::Mountain => 3,
        }
    }

    /// How strongly the soil reference color blends into the base palette
    pub fn soil_blend_ratio(&self) -> f32 {
        match self {
            Self::OceanFloor => 0.3,
            Self::Beach => 0.6,
            Self::Regular => 0.7,
            Self::Mountain => 0.8,
        }
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OceanFloor => write!(f, "ocean floor"),
            Self::Beach => write!(f, "beach"),
            Self::Regular => write!(f, "regular"),
            Self::Mountain => write!(f, "mountain"),
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a displacement-scaled elevation into a terrain category.
///
/// The water level is part of the call signature for parity with the liquid
/// pipeline; the elevation bands themselves are fixed.
pub fn classify(elevation: f32, _water_level: f32) -> TerrainType {
    if elevation < OCEAN_FLOOR_MAX {
        TerrainType::OceanFloor
    } else if elevation < BEACH_MAX {
        TerrainType::Beach
    } else if elevation < REGULAR_MAX {
        TerrainType::Regular
    } else {
        TerrainType::Mountain
    }
}

/// Convert a raw height-field value into the scaled elevation the classifier
/// and the render displacement both consume.
pub fn scale_elevation(raw_height: f32, kind: PlanetKind, roughness_multiplier: f32) -> f32 {
    let distortion = match kind {
        PlanetKind::Terrestrial => DISTORTION_TERRESTRIAL,
        PlanetKind::Gaseous => DISTORTION_GASEOUS,
    };
    raw_height * distortion * roughness_multiplier * DISPLACEMENT_GAIN
}

//! Biome palette table and per-biome parameter ranges
//!
//! Each biome carries four terrain-slot colors (ocean floor, beach, regular,
//! mountain) and plausible ranges for the physical parameters. Unknown biome
//! names fall back to Rocky Highlands.

use crate::color::Rgb;
use crate::params::{PlanetParameters, SoilType};

// =============================================================================
// BIOME ENUM
// =============================================================================

/// Named biome with a fixed palette and parameter ranges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Biome {
    #[default]
    RockyHighlands,
    VolcanicTerrain,
    FrozenWastes,
    LushJungle,
    AridDesert,
    OceanWorld,
    TundraPlains,
    CrystallineFields,
    ToxicMarshlands,
    AncientSeabed,
    MetallicPlains,
    CarbonFlats,
    SaltFlats,
    AshenPlains,
    DuneFields,
}

impl Biome {
    pub fn all() -> &'static [Self] {
        &[
            Self::RockyHighlands,
            Self::VolcanicTerrain,
            Self::FrozenWastes,
            Self::LushJungle,
            Self::AridDesert,
            Self::OceanWorld,
            Self::TundraPlains,
            Self::CrystallineFields,
            Self::ToxicMarshlands,
            Self::AncientSeabed,
            Self::MetallicPlains,
            Self::CarbonFlats,
            Self::SaltFlats,
            Self::AshenPlains,
            Self::DuneFields,
        ]
    }

    /// Look up a biome by its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|b| b.name().to_lowercase() == lower)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RockyHighlands => "Rocky Highlands",
            Self::VolcanicTerrain => "Volcanic Terrain",
            Self::FrozenWastes => "Frozen Wastes",
            Self::LushJungle => "Lush Jungle",
            Self::AridDesert => "Arid Desert",
            Self::OceanWorld => "Ocean World",
            Self::TundraPlains => "Tundra Plains",
            Self::CrystallineFields => "Crystalline Fields",
            Self::ToxicMarshlands => "Toxic Marshlands",
            Self::AncientSeabed => "Ancient Seabed",
            Self::MetallicPlains => "Metallic Plains",
            Self::CarbonFlats => "Carbon Flats",
            Self::SaltFlats => "Salt Flats",
            Self::AshenPlains => "Ashen Plains",
            Self::DuneFields => "Dune Fields",
        }
    }

    /// Base colors for the four terrain slots:
    /// [ocean floor, beach, regular, mountain]
    pub fn palette(&self) -> [Rgb; 4] {
        let hex: [u32; 4] = match self {
            Self::RockyHighlands => [0x3D2314, 0x8D6E63, 0xA1887F, 0xE0E0E0],
            Self::VolcanicTerrain => [0x1A1A1A, 0x3E2723, 0x5D4037, 0x8D6E63],
            Self::FrozenWastes => [0x0D47A1, 0xB3E5FC, 0xE1F5FE, 0xFFFFFF],
            Self::LushJungle => [0x1B5E20, 0x66BB6A, 0x2E7D32, 0xA5D6A7],
            Self::AridDesert => [0x8D6E63, 0xFFE0B2, 0xFFCC80, 0xD7CCC8],
            Self::OceanWorld => [0x01579B, 0x4FC3F7, 0x0288D1, 0xB3E5FC],
            Self::TundraPlains => [0x4E342E, 0xBCAAA4, 0xD7CCC8, 0xECEFF1],
            Self::CrystallineFields => [0x4A148C, 0xCE93D8, 0xAB47BC, 0xF3E5F5],
            Self::ToxicMarshlands => [0x33691E, 0x9CCC65, 0x689F38, 0xDCE775],
            Self::AncientSeabed => [0x3E2723, 0xA1887F, 0x8D6E63, 0xD7CCC8],
            Self::MetallicPlains => [0x263238, 0x90A4AE, 0x607D8B, 0xCFD8DC],
            Self::CarbonFlats => [0x212121, 0x616161, 0x424242, 0x9E9E9E],
            Self::SaltFlats => [0xBDBDBD, 0xFFFFFF, 0xF5F5F5, 0xE0E0E0],
            Self::AshenPlains => [0x212121, 0x757575, 0x616161, 0xBDBDBD],
            Self::DuneFields => [0xBF360C, 0xE64A19, 0xFF7043, 0xFFAB91],
        };
        [
            Rgb::from_hex(hex[0]),
            Rgb::from_hex(hex[1]),
            Rgb::from_hex(hex[2]),
            Rgb::from_hex(hex[3]),
        ]
    }

    /// Plausible parameter ranges for planets of this biome
    pub fn ranges(&self) -> BiomeRanges {
        match self {
            Self::RockyHighlands => BiomeRanges::new(
                (210.0, 300.0),
                (0.0, 0.3),
                (0.6, 1.0),
                &[SoilType::Rocky, SoilType::Dusty],
            ),
            Self::VolcanicTerrain => BiomeRanges::new(
                (350.0, 700.0),
                (0.0, 0.2),
                (0.7, 1.0),
                &[SoilType::Volcanic, SoilType::Rocky],
            ),
            Self::FrozenWastes => BiomeRanges::new(
                (50.0, 210.0),
                (0.0, 0.6),
                (0.3, 0.7),
                &[SoilType::Frozen, SoilType::Rocky],
            ),
            Self::LushJungle => BiomeRanges::new(
                (280.0, 320.0),
                (0.4, 0.8),
                (0.3, 0.6),
                &[SoilType::Organic, SoilType::Muddy],
            ),
            Self::AridDesert => BiomeRanges::new(
                (300.0, 380.0),
                (0.0, 0.1),
                (0.4, 0.8),
                &[SoilType::Sandy, SoilType::Dusty],
            ),
            Self::OceanWorld => BiomeRanges::new(
                (273.0, 320.0),
                (0.7, 1.0),
                (0.1, 0.4),
                &[SoilType::Muddy, SoilType::Sandy],
            ),
            Self::TundraPlains => BiomeRanges::new(
                (210.0, 273.0),
                (0.1, 0.4),
                (0.3, 0.6),
                &[SoilType::Frozen, SoilType::Dusty],
            ),
            Self::CrystallineFields => BiomeRanges::new(
                (100.0, 250.0),
                (0.0, 0.2),
                (0.5, 0.9),
                &[SoilType::Rocky, SoilType::Frozen],
            ),
            Self::ToxicMarshlands => BiomeRanges::new(
                (280.0, 340.0),
                (0.5, 0.9),
                (0.2, 0.5),
                &[SoilType::Muddy, SoilType::Organic],
            ),
            Self::AncientSeabed => BiomeRanges::new(
                (250.0, 320.0),
                (0.0, 0.2),
                (0.3, 0.6),
                &[SoilType::Sandy, SoilType::Muddy],
            ),
            Self::MetallicPlains => BiomeRanges::new(
                (150.0, 400.0),
                (0.0, 0.1),
                (0.4, 0.7),
                &[SoilType::Rocky, SoilType::Dusty],
            ),
            Self::CarbonFlats => BiomeRanges::new(
                (200.0, 500.0),
                (0.0, 0.1),
                (0.3, 0.6),
                &[SoilType::Dusty, SoilType::Rocky],
            ),
            Self::SaltFlats => BiomeRanges::new(
                (250.0, 330.0),
                (0.0, 0.2),
                (0.1, 0.4),
                &[SoilType::Dusty, SoilType::Sandy],
            ),
            Self::AshenPlains => BiomeRanges::new(
                (300.0, 600.0),
                (0.0, 0.1),
                (0.3, 0.7),
                &[SoilType::Dusty, SoilType::Volcanic],
            ),
            Self::DuneFields => BiomeRanges::new(
                (310.0, 420.0),
                (0.0, 0.05),
                (0.5, 0.9),
                &[SoilType::Sandy, SoilType::Dusty],
            ),
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// PARAMETER RANGES
// =============================================================================

/// Plausible physical parameter ranges for one biome
#[derive(Clone, Copy, Debug)]
pub struct BiomeRanges {
    /// Surface temperature range in Kelvin
    pub temperature: (f32, f32),
    /// Liquid coverage range
    pub water_level: (f32, f32),
    /// Surface roughness range
    pub roughness: (f32, f32),
    /// Soil types that occur in this biome; first entry is the canonical one
    pub soils: &'static [SoilType],
}

impl BiomeRanges {
    fn new(
        temperature: (f32, f32),
        water_level: (f32, f32),
        roughness: (f32, f32),
        soils: &'static [SoilType],
    ) -> Self {
        Self {
            temperature,
            water_level,
            roughness,
            soils,
        }
    }

    /// The soil type used when a planet's configured soil does not occur here
    pub fn canonical_soil(&self) -> SoilType {
        self.soils[0]
    }
}

/// Clamp a planet's numeric parameters into its biome's plausible ranges and
/// replace a soil type the biome does not support with its canonical one.
/// Unknown biome names clamp against Rocky Highlands.
pub fn clamp_to_biome(params: &PlanetParameters) -> PlanetParameters {
    let biome = Biome::from_name(&params.biome).unwrap_or_default();
    let ranges = biome.ranges();

    let mut adjusted = params.clone();
    adjusted.temperature = params
        .temperature
        .clamp(ranges.temperature.0, ranges.temperature.1);
    adjusted.water_level = params
        .water_level
        .clamp(ranges.water_level.0, ranges.water_level.1);
    adjusted.surface_roughness = params
        .surface_roughness
        .clamp(ranges.roughness.0, ranges.roughness.1);
    if !ranges.soils.contains(&params.soil_type) {
        adjusted.soil_type = ranges.canonical_soil();
    }
    adjusted
}

/// Resolve the working palette for a planet: caller palettes are taken as-is,
/// otherwise the biome palette is shifted by the soil modifier per slot.
pub fn resolve_palette(params: &PlanetParameters) -> [Rgb; 4] {
    if let Some(palette) = params.custom_palette {
        return palette;
    }

    let biome = Biome::from_name(&params.biome).unwrap_or_default();
    let (dr, dg, db) = params.soil_type.palette_modifier();
    let base = biome.palette();
    [
        base[0].shifted(dr, dg, db).clamped(),
        base[1].shifted(dr, dg, db).clamped(),
        base[2].shifted(dr, dg, db).clamped(),
        base[3].shifted(dr, dg, db).clamped(),
    ]
}

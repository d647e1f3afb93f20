//! Liquid shell derivation
//!
//! Decides which liquid (if any) covers the planet, whether the shell is
//! visible, its color, and the shell geometry parameters. Liquid types have
//! fixed temperature bands; derivation tolerates a bounded gap to the nearest
//! band so borderline worlds still read as wet.

use glam::Vec3;

use crate::color::Rgb;
use crate::noise_ctx::{sample3, NoiseContext};
use crate::params::PlanetParameters;

// =============================================================================
// LIQUID KINDS
// =============================================================================

/// Liquid composition of the surface shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidKind {
    Water,
    Methane,
    Nitrogen,
    Ammonia,
    Ethane,
}

impl LiquidKind {
    pub fn all() -> &'static [Self] {
        &[
            Self::Water,
            Self::Methane,
            Self::Nitrogen,
            Self::Ammonia,
            Self::Ethane,
        ]
    }

    /// Kinds considered when deriving from temperature alone. Ammonia and
    /// ethane overlap other bands and are only used when explicitly chosen.
    pub fn inferable() -> &'static [Self] {
        &[Self::Water, Self::Methane, Self::Nitrogen]
    }

    /// Temperature band (Kelvin) where this liquid is stable
    pub fn band(&self) -> (f32, f32) {
        match self {
            Self::Water => (273.0, 373.0),
            Self::Methane => (91.0, 112.0),
            Self::Nitrogen => (195.0, 240.0),
            Self::Ammonia => (195.0, 240.0),
            Self::Ethane => (90.0, 184.0),
        }
    }

    pub fn reference_color(&self) -> Rgb {
        match self {
            Self::Water => Rgb::from_hex(0x1E78B4),
            Self::Methane => Rgb::from_hex(0x7FB3D5),
            Self::Nitrogen => Rgb::from_hex(0x90EE90),
            Self::Ammonia => Rgb::from_hex(0xD8BFD8),
            Self::Ethane => Rgb::from_hex(0xFFD700),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Water => "Liquid water (273-373K)",
            Self::Methane => "Liquid methane (91-112K)",
            Self::Nitrogen => "Liquid nitrogen (195-240K)",
            Self::Ammonia => "Liquid ammonia (195-240K)",
            Self::Ethane => "Liquid ethane (90-184K)",
        }
    }

    /// Distance in Kelvin from `temperature` to this liquid's band (zero inside)
    pub fn band_distance(&self, temperature: f32) -> f32 {
        let (lo, hi) = self.band();
        if temperature < lo {
            lo - temperature
        } else if temperature > hi {
            temperature - hi
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for LiquidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Water => write!(f, "water"),
            Self::Methane => write!(f, "methane"),
            Self::Nitrogen => write!(f, "nitrogen"),
            Self::Ammonia => write!(f, "ammonia"),
            Self::Ethane => write!(f, "ethane"),
        }
    }
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Maximum gap in Kelvin between the temperature and a liquid's band for the
/// liquid to still count as plausible
pub const PLAUSIBILITY_SLACK: f32 = 60.0;

/// Derive the liquid type from temperature: the band containing it, else the
/// nearest band within the plausibility slack, else none.
pub fn infer_liquid(temperature: f32) -> Option<LiquidKind> {
    let mut best: Option<(LiquidKind, f32)> = None;
    for &kind in LiquidKind::inferable() {
        let dist = kind.band_distance(temperature);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((kind, dist));
        }
    }
    best.and_then(|(kind, dist)| (dist < PLAUSIBILITY_SLACK).then_some(kind))
}

/// Whether a liquid can exist at this temperature (within slack of its band)
pub fn is_plausible(kind: LiquidKind, temperature: f32) -> bool {
    kind.band_distance(temperature) < PLAUSIBILITY_SLACK
}

// =============================================================================
// COLOR
// =============================================================================

/// Navy tint for cold and saline water
const NAVY: u32 = 0x0047AB;

/// Algal green tint for hot water
const DEEP_GREEN: u32 = 0x006400;

/// Water turns navy below this temperature
const COLD_WATER_BELOW: f32 = 283.0;

/// Water greens above this temperature
const HOT_WATER_ABOVE: f32 = 350.0;

/// Shell color for a liquid at the given conditions. Only water reacts to
/// temperature and salinity; other liquids use their reference color.
pub fn liquid_color(kind: LiquidKind, temperature: f32, salinity: f32) -> Rgb {
    let mut color = kind.reference_color();
    if kind == LiquidKind::Water {
        if temperature < COLD_WATER_BELOW {
            color = color.lerp(Rgb::from_hex(NAVY), 0.3);
        } else if temperature > HOT_WATER_ABOVE {
            color = color.lerp(Rgb::from_hex(DEEP_GREEN), 0.2);
        }
        color = color.lerp(Rgb::from_hex(NAVY), salinity.clamp(0.0, 1.0) * 0.5);
    }
    color.clamped()
}

// =============================================================================
// SHELL
// =============================================================================

/// Shell radius gain per unit of effective water level
const SHELL_GAIN: f32 = 0.02;

/// Visible shells never render below this effective level
const VISIBLE_LEVEL_FLOOR: f32 = 0.5;

/// Wave displacement amplitude along the shell normal
pub const WAVE_AMPLITUDE: f32 = 0.005;

/// Wave noise frequency
const WAVE_FREQ: f32 = 10.0;

/// Resolved liquid shell parameters for one planet
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LiquidLayer {
    /// Whether the shell renders at all
    pub visible: bool,
    /// Liquid composition; None when nothing is plausible at this temperature
    pub kind: Option<LiquidKind>,
    /// Shell surface color (water reference when no liquid applies)
    pub color: Rgb,
    /// Shell sphere radius in planet-radius units
    pub shell_radius: f32,
    /// Wave displacement amplitude (zero when hidden)
    pub wave_amplitude: f32,
}

impl LiquidLayer {
    /// Derive the shell from planet parameters.
    pub fn generate(params: &PlanetParameters) -> Self {
        let kind = params
            .liquid_type
            .or_else(|| infer_liquid(params.temperature));
        let plausible = kind.is_some_and(|k| is_plausible(k, params.temperature));
        let visible = params.liquid_enabled && params.water_level > 0.0 && plausible;

        let effective_level = if visible {
            params.water_level.max(VISIBLE_LEVEL_FLOOR)
        } else {
            params.water_level
        };

        Self {
            visible,
            kind,
            color: kind
                .map(|k| liquid_color(k, params.temperature, params.salinity))
                .unwrap_or_else(|| LiquidKind::Water.reference_color()),
            shell_radius: params.radius * (1.0 + effective_level.clamp(0.0, 1.0) * SHELL_GAIN),
            wave_amplitude: if visible { WAVE_AMPLITUDE } else { 0.0 },
        }
    }
}

/// Wave displacement at one shell direction, in [-WAVE_AMPLITUDE, WAVE_AMPLITUDE]
pub fn wave_offset(ctx: &NoiseContext, dir: Vec3) -> f32 {
    sample3(&ctx.waves, dir, WAVE_FREQ) * WAVE_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::SurfaceSeeds;

    #[test]
    fn test_in_band_temperatures_infer_directly() {
        assert_eq!(infer_liquid(288.0), Some(LiquidKind::Water));
        assert_eq!(infer_liquid(100.0), Some(LiquidKind::Methane));
        assert_eq!(infer_liquid(220.0), Some(LiquidKind::Nitrogen));
    }

    #[test]
    fn test_cold_gap_selects_methane_band() {
        // 150K sits between bands: 38K to methane, 45K to nitrogen
        assert_eq!(infer_liquid(150.0), Some(LiquidKind::Methane));
    }

    #[test]
    fn test_extreme_heat_infers_nothing() {
        assert_eq!(infer_liquid(600.0), None);
        assert_eq!(infer_liquid(10.0), None);
    }

    #[test]
    fn test_default_planet_has_visible_water() {
        let layer = LiquidLayer::generate(&PlanetParameters::default());
        assert!(layer.visible);
        assert_eq!(layer.kind, Some(LiquidKind::Water));
        assert_eq!(layer.wave_amplitude, WAVE_AMPLITUDE);
    }

    #[test]
    fn test_disabled_liquid_is_hidden() {
        let params = PlanetParameters {
            liquid_enabled: false,
            ..Default::default()
        };
        assert!(!LiquidLayer::generate(&params).visible);
    }

    #[test]
    fn test_dry_planet_is_hidden() {
        let params = PlanetParameters {
            water_level: 0.0,
            ..Default::default()
        };
        assert!(!LiquidLayer::generate(&params).visible);
    }

    #[test]
    fn test_implausible_explicit_liquid_is_hidden() {
        let params = PlanetParameters {
            liquid_type: Some(LiquidKind::Water),
            temperature: 500.0,
            ..Default::default()
        };
        let layer = LiquidLayer::generate(&params);
        assert!(!layer.visible);
    }

    #[test]
    fn test_visible_shell_enforces_level_floor() {
        let params = PlanetParameters {
            water_level: 0.1,
            ..Default::default()
        };
        let layer = LiquidLayer::generate(&params);
        assert!(layer.visible);
        // Effective level rises to 0.5 even though only 0.1 was configured
        assert!((layer.shell_radius - 1.01).abs() < 1e-6);
    }

    #[test]
    fn test_hidden_shell_keeps_raw_level() {
        let params = PlanetParameters {
            water_level: 0.1,
            temperature: 600.0,
            ..Default::default()
        };
        let layer = LiquidLayer::generate(&params);
        assert!(!layer.visible);
        assert!((layer.shell_radius - 1.002).abs() < 1e-6);
        assert_eq!(layer.wave_amplitude, 0.0);
    }

    #[test]
    fn test_cold_water_shifts_toward_navy() {
        let base = liquid_color(LiquidKind::Water, 300.0, 0.0);
        let cold = liquid_color(LiquidKind::Water, 270.0, 0.0);
        assert!(cold.r < base.r);
        assert!(cold.g < base.g);
    }

    #[test]
    fn test_salinity_darkens_water_only() {
        let fresh = liquid_color(LiquidKind::Water, 300.0, 0.0);
        let briny = liquid_color(LiquidKind::Water, 300.0, 1.0);
        assert_ne!(fresh, briny);

        let methane_fresh = liquid_color(LiquidKind::Methane, 100.0, 0.0);
        let methane_briny = liquid_color(LiquidKind::Methane, 100.0, 1.0);
        assert_eq!(methane_fresh, methane_briny);
    }

    #[test]
    fn test_wave_offset_bounded() {
        let ctx = NoiseContext::new(&SurfaceSeeds::from_master(42));
        for i in 0..100 {
            let t = i as f32 * 0.0628;
            let dir = glam::Vec3::new(t.cos(), (t * 0.31).sin(), t.sin()).normalize();
            assert!(wave_offset(&ctx, dir).abs() <= WAVE_AMPLITUDE);
        }
    }
}

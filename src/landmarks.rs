//! Landmark influence on the height field
//!
//! Landmarks are externally supplied surface features (craters, storms, ...)
//! with a center direction, an influence radius, and a falloff profile. The
//! profile is resolved from the type string once per generation pass; the
//! per-sample path only does arithmetic.

use glam::Vec3;

use crate::params::PlanetKind;

/// Influence types that occur on solid planets
pub const TERRESTRIAL_TYPES: &[&str] = &[
    "mountain",
    "crater",
    "valley",
    "basin",
    "canyon",
    "volcano",
    "dune",
    "glacier",
    "trench",
    "ocean_ridge",
    "ice_patch",
    "lava_flow",
];

/// Influence types that occur on gas giants
pub const GASEOUS_TYPES: &[&str] = &[
    "storm",
    "vortex",
    "band",
    "spot",
    "turbulent",
    "cyclone",
    "anticyclone",
    "zonal_flow",
    "jet_stream",
    "cloud_layer",
    "atmospheric_haze",
];

// =============================================================================
// INPUT STRUCT
// =============================================================================

/// One externally supplied surface feature. Read-only input; fields mirror
/// the upstream data source, validation happens at resolution time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Landmark {
    /// Feature center; normalized onto the unit sphere before use
    pub coordinates: [f32; 3],
    /// Feature type name; unknown names fall back to a linear falloff
    pub influence_type: String,
    /// Influence cutoff as chord distance on the unit sphere
    pub influence_radius: f32,
    /// Signed height amplitude (negative carves a depression)
    pub influence_strength: f32,
    /// Extra high-frequency detail added inside the influence area
    pub influence_roughness: f32,
    /// Visibility filter; inferred from the type name when absent
    pub category: Option<PlanetKind>,
    /// Opaque upstream label, surfaced in summaries only
    pub classification_id: Option<String>,
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            coordinates: [0.0, 0.0, 0.0],
            influence_type: String::new(),
            influence_radius: 0.0,
            influence_strength: 0.0,
            influence_roughness: 0.0,
            category: None,
            classification_id: None,
        }
    }
}

impl Landmark {
    pub fn new(coordinates: [f32; 3], influence_type: &str, radius: f32, strength: f32) -> Self {
        Self {
            coordinates,
            influence_type: influence_type.to_string(),
            influence_radius: radius,
            influence_strength: strength,
            ..Default::default()
        }
    }

    /// Category filter value: explicit when set, otherwise inferred from the
    /// type name (unknown types count as terrestrial).
    pub fn effective_category(&self) -> PlanetKind {
        if let Some(category) = self.category {
            return category;
        }
        if GASEOUS_TYPES.contains(&self.influence_type.as_str()) {
            PlanetKind::Gaseous
        } else {
            PlanetKind::Terrestrial
        }
    }
}

// =============================================================================
// FALLOFF PROFILES
// =============================================================================

/// Height falloff shape over normalized distance t = dist/radius in [0, 1].
/// Resolved once per landmark, never re-matched per sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfluenceProfile {
    /// Raised rim near the cutoff, depressed center
    Crater,
    /// Quadratic peak falloff
    Mountain,
    /// Gentler 1.5-power falloff; carve with negative strength
    Valley,
    /// Cone with a caldera dip in the middle fifth
    Volcano,
    /// Smooth squared-cosine dome
    Glacier,
    /// Flat-bottomed bowl reaching full strength past t = 0.2
    Basin,
    /// Plain linear falloff (custom and gas-giant features)
    Linear,
}

impl InfluenceProfile {
    /// Map a type name onto its profile. Canyons and trenches carve like
    /// valleys, ocean ridges build like mountains; everything unrecognized
    /// falls back to linear.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "crater" => Self::Crater,
            "mountain" | "ocean_ridge" => Self::Mountain,
            "valley" | "canyon" | "trench" => Self::Valley,
            "volcano" => Self::Volcano,
            "glacier" | "ice_patch" => Self::Glacier,
            "basin" => Self::Basin,
            _ => Self::Linear,
        }
    }

    /// Height contribution at normalized distance `t` for a landmark of the
    /// given strength.
    pub fn height_at(&self, t: f32, strength: f32) -> f32 {
        match self {
            Self::Crater => {
                if t > 0.8 {
                    strength * 0.5 * (1.0 - (t - 0.8) * 5.0)
                } else {
                    strength * t
                }
            }
            Self::Mountain => strength * (1.0 - t).powi(2),
            Self::Valley => strength * (1.0 - t).powf(1.5),
            Self::Volcano => {
                if t < 0.2 {
                    strength * -0.3
                } else {
                    strength * (1.0 - t).powf(1.2)
                }
            }
            Self::Glacier => {
                let c = (std::f32::consts::PI * t / 2.0).cos();
                strength * c * c
            }
            Self::Basin => strength * (t / 0.2).min(1.0),
            Self::Linear => strength * (1.0 - t),
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// A landmark after validation: normalized center, precomputed profile.
#[derive(Clone, Debug)]
pub struct ResolvedLandmark {
    pub center: Vec3,
    pub radius: f32,
    pub strength: f32,
    pub roughness: f32,
    pub profile: InfluenceProfile,
}

/// Validate and resolve the landmark list for one planet kind.
///
/// Skips landmarks with non-positive radius or degenerate coordinates, and
/// landmarks whose category does not match the planet kind.
pub fn resolve_landmarks(landmarks: &[Landmark], kind: PlanetKind) -> Vec<ResolvedLandmark> {
    landmarks
        .iter()
        .filter(|lm| lm.effective_category() == kind)
        .filter_map(|lm| {
            if !(lm.influence_radius > 0.0) {
                return None;
            }
            let raw = Vec3::from_array(lm.coordinates);
            if !raw.is_finite() || raw.length_squared() == 0.0 {
                return None;
            }
            Some(ResolvedLandmark {
                center: raw.normalize(),
                radius: lm.influence_radius,
                strength: lm.influence_strength,
                roughness: lm.influence_roughness,
                profile: InfluenceProfile::from_type_name(&lm.influence_type),
            })
        })
        .collect()
}

// =============================================================================
// ACCUMULATION
// =============================================================================

/// Combined landmark contribution at one sample direction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Influence {
    pub height: f32,
    pub roughness: f32,
}

/// Accumulate all landmark contributions at `dir`, weight-normalized so that
/// stacked landmarks average instead of summing without bound.
pub fn accumulate(landmarks: &[ResolvedLandmark], dir: Vec3) -> Influence {
    let mut height_sum = 0.0;
    let mut roughness_sum = 0.0;
    let mut weight_sum = 0.0;

    for lm in landmarks {
        let dist = (dir - lm.center).length();
        if dist > lm.radius {
            continue;
        }
        let t = dist / lm.radius;
        let w = 1.0 - t;
        height_sum += lm.profile.height_at(t, lm.strength) * w;
        roughness_sum += lm.roughness * w;
        weight_sum += w;
    }

    if weight_sum > 0.0 {
        Influence {
            height: height_sum / weight_sum,
            roughness: roughness_sum / weight_sum,
        }
    } else {
        Influence::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit direction at an exact chord distance from +X on the XY great circle
    fn dir_at_chord(chord: f32) -> Vec3 {
        let angle = 2.0 * (chord / 2.0).asin();
        Vec3::new(angle.cos(), angle.sin(), 0.0)
    }

    fn crater() -> Vec<ResolvedLandmark> {
        resolve_landmarks(
            &[Landmark::new([1.0, 0.0, 0.0], "crater", 0.5, 1.0)],
            PlanetKind::Terrestrial,
        )
    }

    #[test]
    fn test_influence_zero_outside_radius() {
        let lms = crater();
        let far = dir_at_chord(0.51);
        assert_eq!(accumulate(&lms, far), Influence::default());

        let opposite = Vec3::new(-1.0, 0.0, 0.0);
        assert_eq!(accumulate(&lms, opposite), Influence::default());
    }

    #[test]
    fn test_crater_center_and_rim_values() {
        let lms = crater();

        // At the center t = 0, so the crater floor sits at zero
        let center = accumulate(&lms, Vec3::new(1.0, 0.0, 0.0));
        assert!(center.height.abs() < 1e-6);

        // At chord 0.45, t = 0.9: 0.5 * (1 - 0.1 * 5) = 0.25
        let rim = accumulate(&lms, dir_at_chord(0.45));
        assert!((rim.height - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_overlapping_duplicates_collapse_to_single() {
        let one = resolve_landmarks(
            &[Landmark::new([0.0, 1.0, 0.0], "mountain", 0.6, 0.8)],
            PlanetKind::Terrestrial,
        );
        let two = resolve_landmarks(
            &[
                Landmark::new([0.0, 1.0, 0.0], "mountain", 0.6, 0.8),
                Landmark::new([0.0, 1.0, 0.0], "mountain", 0.6, 0.8),
            ],
            PlanetKind::Terrestrial,
        );

        let dir = Vec3::new(0.3, 0.9, 0.1).normalize();
        let a = accumulate(&one, dir);
        let b = accumulate(&two, dir);
        assert!((a.height - b.height).abs() < 1e-6);
        assert!((a.roughness - b.roughness).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_landmarks_are_skipped() {
        let lms = resolve_landmarks(
            &[
                Landmark::new([1.0, 0.0, 0.0], "mountain", 0.0, 1.0),
                Landmark::new([0.0, 0.0, 0.0], "mountain", 0.5, 1.0),
                Landmark::new([f32::NAN, 0.0, 0.0], "mountain", 0.5, 1.0),
                Landmark::new([1.0, 0.0, 0.0], "mountain", -0.5, 1.0),
            ],
            PlanetKind::Terrestrial,
        );
        assert!(lms.is_empty());
    }

    #[test]
    fn test_category_filters_by_planet_kind() {
        let mixed = vec![
            Landmark::new([1.0, 0.0, 0.0], "storm", 0.5, 1.0),
            Landmark::new([1.0, 0.0, 0.0], "crater", 0.5, 1.0),
        ];

        let terrestrial = resolve_landmarks(&mixed, PlanetKind::Terrestrial);
        assert_eq!(terrestrial.len(), 1);
        assert_eq!(terrestrial[0].profile, InfluenceProfile::Crater);

        let gaseous = resolve_landmarks(&mixed, PlanetKind::Gaseous);
        assert_eq!(gaseous.len(), 1);
        assert_eq!(gaseous[0].profile, InfluenceProfile::Linear);
    }

    #[test]
    fn test_explicit_category_overrides_inference() {
        let lm = Landmark {
            category: Some(PlanetKind::Gaseous),
            ..Landmark::new([1.0, 0.0, 0.0], "crater", 0.5, 1.0)
        };
        assert!(resolve_landmarks(std::slice::from_ref(&lm), PlanetKind::Terrestrial).is_empty());
        assert_eq!(
            resolve_landmarks(std::slice::from_ref(&lm), PlanetKind::Gaseous).len(),
            1
        );
    }

    #[test]
    fn test_unknown_type_gets_linear_profile() {
        assert_eq!(
            InfluenceProfile::from_type_name("lava_tube_network"),
            InfluenceProfile::Linear
        );
        assert_eq!(InfluenceProfile::from_type_name(""), InfluenceProfile::Linear);
    }

    #[test]
    fn test_volcano_caldera_dips_below_zero() {
        let profile = InfluenceProfile::Volcano;
        assert!((profile.height_at(0.1, 1.0) - -0.3).abs() < 1e-6);
        assert!(profile.height_at(0.5, 1.0) > 0.0);
    }

    #[test]
    fn test_basin_reaches_full_strength_past_fifth() {
        let profile = InfluenceProfile::Basin;
        assert!(profile.height_at(0.0, -1.0).abs() < 1e-6);
        assert!((profile.height_at(0.1, -1.0) - -0.5).abs() < 1e-6);
        assert!((profile.height_at(0.5, -1.0) - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_glacier_dome_is_smooth_and_positive() {
        let profile = InfluenceProfile::Glacier;
        assert!((profile.height_at(0.0, 1.0) - 1.0).abs() < 1e-6);
        assert!(profile.height_at(1.0, 1.0).abs() < 1e-6);
        assert!(profile.height_at(0.5, 1.0) > 0.0);
    }

    #[test]
    fn test_roughness_accumulates_weight_normalized() {
        let lms = resolve_landmarks(
            &[Landmark {
                influence_roughness: 0.6,
                ..Landmark::new([1.0, 0.0, 0.0], "mountain", 0.5, 1.0)
            }],
            PlanetKind::Terrestrial,
        );
        let inf = accumulate(&lms, dir_at_chord(0.25));
        assert!((inf.roughness - 0.6).abs() < 1e-6);
    }
}

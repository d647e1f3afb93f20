//! Surface assembly module
//!
//! Runs the full synthesis pass over a sampling mesh and bundles everything
//! it produces into a single struct for easy passing between functions.

use glam::Vec3;

use crate::atmosphere::{self, AtmosphereLayer, CloudPlacement};
use crate::biomes;
use crate::color::{self, Rgb};
use crate::gas_giant;
use crate::height_field::HeightField;
use crate::landmarks::{self, ResolvedLandmark};
use crate::liquid::LiquidLayer;
use crate::noise_ctx::NoiseContext;
use crate::params::{PlanetKind, PlanetParameters};
use crate::relief;
use crate::seeds::SurfaceSeeds;
use crate::sphere;
use crate::terrain::{self, TerrainType};

/// All synthesized surface data bundled together
pub struct PlanetSurface {
    /// Seeds used for generation (allows recreation)
    pub seeds: SurfaceSeeds,
    /// Density-derived planet class the pass ran under
    pub kind: PlanetKind,
    /// Input parameters the pass ran with
    pub params: PlanetParameters,
    /// Four-slot palette after soil modifiers (or the caller's custom one)
    pub palette: [Rgb; 4],
    /// Landmarks filtered to this planet class, profiles pre-resolved
    pub landmarks: Vec<ResolvedLandmark>,
    /// Seeded noise sources shared by every stage
    pub noise: NoiseContext,
    /// Raw elevation cache keyed by quantized direction
    pub height_field: HeightField,
    /// Sample directions (unit vectors), in caller order
    pub directions: Vec<Vec3>,
    /// Displacement-scaled elevation per direction
    pub elevations: Vec<f32>,
    /// Terrain classification per direction
    pub terrain: Vec<TerrainType>,
    /// Final color per direction
    pub colors: Vec<Rgb>,
    /// Liquid shell parameters (may be hidden)
    pub liquid: LiquidLayer,
    /// Atmosphere shell parameters
    pub atmosphere: AtmosphereLayer,
    /// Cloud patch placements (empty for gaseous planets)
    pub clouds: Vec<CloudPlacement>,
}

impl PlanetSurface {
    /// Run the synthesis pass over the given sampling mesh.
    pub fn generate(params: &PlanetParameters, directions: Vec<Vec3>) -> Self {
        let kind = params.kind();
        let seeds = SurfaceSeeds::from_master(params.seed);
        let noise = NoiseContext::new(&seeds);

        // Landmarks that apply to this planet class
        let landmarks = landmarks::resolve_landmarks(&params.landmarks, kind);

        // Raw elevation cache over the sampling mesh
        let height_field = HeightField::generate(&noise, params, &landmarks, kind, &directions);

        let palette = biomes::resolve_palette(params);

        // Displace, classify, and color every sample
        let mut elevations = Vec::with_capacity(directions.len());
        let mut terrain_types = Vec::with_capacity(directions.len());
        let mut colors = Vec::with_capacity(directions.len());
        for &dir in &directions {
            let raw = match kind {
                PlanetKind::Terrestrial => height_field.height(dir),
                PlanetKind::Gaseous => gas_giant::band_elevation(&noise, &landmarks, dir),
            };
            let elevation = displaced_elevation(&noise, params, kind, raw, dir);
            let terrain_type = terrain::classify(elevation, params.water_level);
            let color = point_color(
                &noise,
                seeds.jitter,
                params,
                &palette,
                kind,
                terrain_type,
                dir,
            );
            elevations.push(elevation);
            terrain_types.push(terrain_type);
            colors.push(color);
        }

        // Shells and sky do not depend on the sampling mesh
        let liquid = LiquidLayer::generate(params);
        let atmosphere = AtmosphereLayer::generate(params);
        let clouds = atmosphere::generate_clouds(params, seeds.clouds);

        Self {
            seeds,
            kind,
            params: params.clone(),
            palette,
            landmarks,
            noise,
            height_field,
            directions,
            elevations,
            terrain: terrain_types,
            colors,
            liquid,
            atmosphere,
            clouds,
        }
    }

    /// Convenience accessor for the master seed
    pub fn seed(&self) -> u64 {
        self.seeds.master
    }

    /// Number of sampled directions
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Raw (pre-displacement) elevation at an arbitrary direction, served
    /// from the cache: exact hit for sampled directions, nearest neighbor
    /// otherwise.
    pub fn raw_height(&self, dir: Vec3) -> f32 {
        self.height_field.height(dir)
    }

    /// Displacement-scaled elevation at an arbitrary direction. For sampled
    /// directions this reproduces the stored per-vertex value exactly.
    pub fn elevation(&self, dir: Vec3) -> f32 {
        let raw = match self.kind {
            PlanetKind::Terrestrial => self.height_field.height(dir),
            PlanetKind::Gaseous => gas_giant::band_elevation(&self.noise, &self.landmarks, dir),
        };
        displaced_elevation(&self.noise, &self.params, self.kind, raw, dir)
    }

    /// Displaced world position of one sampled vertex
    pub fn displaced_point(&self, index: usize) -> Vec3 {
        self.directions[index] * (self.params.radius + self.elevations[index])
    }

    /// Get sample info at an index
    pub fn sample(&self, index: usize) -> SurfaceSample {
        SurfaceSample {
            index,
            direction: self.directions[index],
            elevation: self.elevations[index],
            terrain: self.terrain[index],
            color: self.colors[index],
        }
    }

    /// Sample count per terrain class, indexed by palette slot
    pub fn terrain_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for terrain_type in &self.terrain {
            counts[terrain_type.palette_slot()] += 1;
        }
        counts
    }
}

/// Information about a single sampled surface point
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSample {
    pub index: usize,
    pub direction: Vec3,
    pub elevation: f32,
    pub terrain: TerrainType,
    pub color: Rgb,
}

impl SurfaceSample {
    /// Format elevation as string
    pub fn elevation_str(&self) -> String {
        format!("{:+.3} ({})", self.elevation, self.terrain)
    }
}

/// Scale a raw height into render displacement; high ground additionally has
/// soil-texture micro-relief carved out before classification.
fn displaced_elevation(
    noise: &NoiseContext,
    params: &PlanetParameters,
    kind: PlanetKind,
    raw: f32,
    dir: Vec3,
) -> f32 {
    let mut elevation = terrain::scale_elevation(raw, kind, params.roughness_multiplier());
    if kind == PlanetKind::Terrestrial && elevation > terrain::RELIEF_THRESHOLD {
        elevation -= relief::texture_detail(
            noise,
            dir,
            params.soil_texture,
            params.soil_type,
            params.surface_roughness,
        );
    }
    elevation
}

/// Displacement-scaled elevation of one direction, computed from scratch
/// without a height-field cache. The preview exporter runs this per pixel;
/// for directions a [`PlanetSurface`] sampled, it reproduces the cached value.
pub fn point_elevation(
    noise: &NoiseContext,
    params: &PlanetParameters,
    landmarks: &[ResolvedLandmark],
    kind: PlanetKind,
    dir: Vec3,
) -> f32 {
    let raw = match kind {
        PlanetKind::Terrestrial => {
            crate::height_field::raw_height(noise, params, landmarks, kind, dir)
        }
        PlanetKind::Gaseous => gas_giant::band_elevation(noise, landmarks, dir),
    };
    displaced_elevation(noise, params, kind, raw, dir)
}

/// Final color of one classified direction, selecting the render path for
/// the planet class.
pub fn point_color(
    noise: &NoiseContext,
    jitter_seed: u64,
    params: &PlanetParameters,
    palette: &[Rgb; 4],
    kind: PlanetKind,
    terrain_type: TerrainType,
    dir: Vec3,
) -> Rgb {
    match kind {
        PlanetKind::Terrestrial => color::surface_color(
            noise,
            jitter_seed,
            dir,
            terrain_type,
            palette,
            params.soil_type,
            params.soil_texture,
            kind,
        ),
        PlanetKind::Gaseous => gas_giant::band_color(dir, params.temperature),
    }
}

/// Generate a surface sampled over an equirectangular lat/long grid.
/// This is the mesh the preview exporter consumes, one sample per pixel.
pub fn generate_latlon_surface(
    params: &PlanetParameters,
    width: usize,
    height: usize,
) -> PlanetSurface {
    PlanetSurface::generate(params, sphere::latlon_grid(width, height))
}

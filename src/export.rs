//! Equirectangular PNG export
//!
//! The exporters render straight from the parameters rather than walking a
//! cached [`PlanetSurface`](crate::surface::PlanetSurface): every pixel maps
//! to a unit direction and runs the full per-point pipeline. Rows fan out
//! across threads, which keeps large maps cheap while the mesh-facing
//! generation path stays deterministic and single-threaded.

use image::{ImageBuffer, RgbImage};
use rayon::prelude::*;

use crate::color::Rgb;
use crate::landmarks::{self, ResolvedLandmark};
use crate::noise_ctx::NoiseContext;
use crate::params::{PlanetKind, PlanetParameters};
use crate::seeds::SurfaceSeeds;
use crate::{sphere, surface, terrain};

/// Everything resolved once per export instead of once per pixel.
struct RenderState {
    kind: PlanetKind,
    jitter_seed: u64,
    noise: NoiseContext,
    landmarks: Vec<ResolvedLandmark>,
    palette: [Rgb; 4],
}

impl RenderState {
    fn new(params: &PlanetParameters) -> Self {
        let kind = params.kind();
        let seeds = SurfaceSeeds::from_master(params.seed);
        Self {
            kind,
            jitter_seed: seeds.jitter,
            noise: NoiseContext::new(&seeds),
            landmarks: landmarks::resolve_landmarks(&params.landmarks, kind),
            palette: crate::biomes::resolve_palette(params),
        }
    }
}

/// Export the colored surface as an equirectangular PNG.
pub fn export_surface_map(
    params: &PlanetParameters,
    width: u32,
    height: u32,
    path: &str,
) -> Result<(), image::ImageError> {
    let rows = color_rows(params, width, height);

    let mut img: RgbImage = ImageBuffer::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, color) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, image::Rgb(color.to_u8()));
        }
    }
    img.save(path)
}

/// Export displaced elevation as an equirectangular PNG, normalized over the
/// rendered range and mapped through a spectral colormap.
pub fn export_height_map(
    params: &PlanetParameters,
    width: u32,
    height: u32,
    path: &str,
) -> Result<(), image::ImageError> {
    let rows = elevation_rows(params, width, height);

    let mut min_e = f32::MAX;
    let mut max_e = f32::MIN;
    for row in &rows {
        for &e in row {
            if e < min_e {
                min_e = e;
            }
            if e > max_e {
                max_e = e;
            }
        }
    }
    let range = max_e - min_e;

    let mut img: RgbImage = ImageBuffer::new(width, height);
    if range < 1e-6 {
        // Perfectly flat world: nothing to normalize against
        for y in 0..height {
            for x in 0..width {
                img.put_pixel(x, y, image::Rgb([128, 128, 128]));
            }
        }
        return img.save(path);
    }

    for (y, row) in rows.iter().enumerate() {
        for (x, &e) in row.iter().enumerate() {
            let t = (e - min_e) / range;
            let color = spectral_colormap(t);
            img.put_pixel(x as u32, y as u32, image::Rgb(color.to_u8()));
        }
    }
    img.save(path)
}

/// Color every pixel of an equirectangular grid, one row per parallel job.
fn color_rows(params: &PlanetParameters, width: u32, height: u32) -> Vec<Vec<Rgb>> {
    let state = RenderState::new(params);
    (0..height)
        .into_par_iter()
        .map(|y| {
            let v = (y as f32 + 0.5) / height as f32;
            (0..width)
                .map(|x| {
                    let u = (x as f32 + 0.5) / width as f32;
                    let dir = sphere::latlon_dir(u, v);
                    let elevation = surface::point_elevation(
                        &state.noise,
                        params,
                        &state.landmarks,
                        state.kind,
                        dir,
                    );
                    let terrain_type = terrain::classify(elevation, params.water_level);
                    surface::point_color(
                        &state.noise,
                        state.jitter_seed,
                        params,
                        &state.palette,
                        state.kind,
                        terrain_type,
                        dir,
                    )
                })
                .collect()
        })
        .collect()
}

/// Displaced elevation for every pixel of an equirectangular grid.
fn elevation_rows(params: &PlanetParameters, width: u32, height: u32) -> Vec<Vec<f32>> {
    let state = RenderState::new(params);
    (0..height)
        .into_par_iter()
        .map(|y| {
            let v = (y as f32 + 0.5) / height as f32;
            (0..width)
                .map(|x| {
                    let u = (x as f32 + 0.5) / width as f32;
                    let dir = sphere::latlon_dir(u, v);
                    surface::point_elevation(&state.noise, params, &state.landmarks, state.kind, dir)
                })
                .collect()
        })
        .collect()
}

/// Spectral colormap (matplotlib style): dark blue -> teal -> yellow -> red
fn spectral_colormap(t: f32) -> Rgb {
    const STOPS: [Rgb; 11] = [
        Rgb::new(0.37, 0.31, 0.64),
        Rgb::new(0.20, 0.53, 0.74),
        Rgb::new(0.40, 0.76, 0.65),
        Rgb::new(0.67, 0.87, 0.64),
        Rgb::new(0.90, 0.96, 0.60),
        Rgb::new(1.00, 1.00, 0.75),
        Rgb::new(1.00, 0.88, 0.55),
        Rgb::new(0.99, 0.68, 0.38),
        Rgb::new(0.96, 0.43, 0.26),
        Rgb::new(0.84, 0.24, 0.31),
        Rgb::new(0.62, 0.00, 0.26),
    ];

    let scaled = t.clamp(0.0, 1.0) * 10.0;
    let idx = (scaled as usize).min(9);
    let frac = scaled - idx as f32;
    STOPS[idx].lerp(STOPS[idx + 1], frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_pipeline_matches_surface_pass() {
        let params = PlanetParameters {
            mass: 10.0,
            seed: 42,
            ..Default::default()
        };
        let (width, height) = (8u32, 4u32);
        let rows = color_rows(&params, width, height);
        let surface = surface::generate_latlon_surface(&params, width as usize, height as usize);
        for y in 0..height as usize {
            for x in 0..width as usize {
                assert_eq!(rows[y][x], surface.colors[y * width as usize + x]);
            }
        }
    }

    #[test]
    fn test_elevation_rows_match_surface_pass() {
        let params = PlanetParameters {
            temperature: 120.0,
            seed: 9,
            ..Default::default()
        };
        assert_eq!(params.kind(), PlanetKind::Gaseous);
        let (width, height) = (6u32, 3u32);
        let rows = elevation_rows(&params, width, height);
        let surface = surface::generate_latlon_surface(&params, width as usize, height as usize);
        for y in 0..height as usize {
            for x in 0..width as usize {
                assert_eq!(rows[y][x], surface.elevations[y * width as usize + x]);
            }
        }
    }

    #[test]
    fn test_spectral_colormap_spans_blue_to_red() {
        let low = spectral_colormap(0.0);
        let high = spectral_colormap(1.0);
        assert!(low.b > low.r);
        assert!(high.r > high.b);
        // Out-of-range inputs clamp instead of indexing out of bounds
        assert_eq!(spectral_colormap(-1.0), low);
        assert_eq!(spectral_colormap(2.0), high);
    }
}

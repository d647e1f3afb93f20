//! Planet surface synthesis library
//!
//! Turns a [`PlanetParameters`] description into colored, displaced surface
//! geometry: terrain elevation, classification, palettes, liquid and
//! atmosphere shells, and equirectangular map exports.

pub mod atmosphere;
pub mod biomes;
pub mod color;
pub mod export;
pub mod gas_giant;
pub mod height_field;
pub mod landmarks;
pub mod liquid;
pub mod noise_ctx;
pub mod params;
pub mod relief;
pub mod seeds;
pub mod sphere;
pub mod surface;
pub mod terrain;

pub use color::Rgb;
pub use params::{PlanetKind, PlanetParameters, SoilTexture, SoilType};
pub use surface::PlanetSurface;
pub use terrain::TerrainType;

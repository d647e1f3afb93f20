use std::time::Instant;

use clap::Parser;

use planet_surface::biomes;
use planet_surface::export;
use planet_surface::params::{PlanetKind, PlanetParameters, SoilTexture, SoilType};
use planet_surface::surface;

#[derive(Parser, Debug)]
#[command(name = "planet_surface")]
#[command(about = "Generate a procedural planet surface and export preview maps")]
struct Args {
    /// Master seed (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON parameters file; missing fields fall back to defaults
    #[arg(short, long)]
    params: Option<String>,

    /// Planet mass in Earth masses
    #[arg(long)]
    mass: Option<f32>,

    /// Planet radius in Earth radii
    #[arg(long)]
    radius: Option<f32>,

    /// Mean surface temperature in Kelvin
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Biome palette name (e.g. "Rocky Highlands"); snaps parameters into
    /// the biome's ranges
    #[arg(short, long)]
    biome: Option<String>,

    /// Dominant soil composition (rocky, sandy, volcanic, organic, dusty, frozen, muddy)
    #[arg(long)]
    soil_type: Option<SoilType>,

    /// Fine soil structure (smooth, rough, cracked, layered, porous, grainy, crystalline)
    #[arg(long)]
    soil_texture: Option<SoilTexture>,

    /// Liquid coverage level, 0 (dry) to 1 (flooded)
    #[arg(long)]
    water_level: Option<f32>,

    /// Terrain noisiness multiplier (baseline 0.5)
    #[arg(long)]
    roughness: Option<f32>,

    /// Vertical exaggeration of terrain relief
    #[arg(long)]
    mountain_height: Option<f32>,

    /// Erosion flattening, 0 (none) to 1 (heavy)
    #[arg(long)]
    erosion: Option<f32>,

    /// Requested cloud patch count
    #[arg(long)]
    cloud_count: Option<u32>,

    /// Atmosphere density, 0 (none) to 1 (thick)
    #[arg(long)]
    atmosphere: Option<f32>,

    /// Width of the exported maps in pixels
    #[arg(short = 'W', long, default_value = "512")]
    width: usize,

    /// Height of the exported maps in pixels
    #[arg(short = 'H', long, default_value = "256")]
    height: usize,

    /// Output path for the surface color map
    #[arg(long, default_value = "surface.png")]
    surface_out: String,

    /// Output path for the elevation map
    #[arg(long, default_value = "heightmap.png")]
    height_out: String,
}

/// Failure while loading a parameters file.
#[derive(Debug)]
enum ParamsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for ParamsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read params file: {}", err),
            Self::Parse(err) => write!(f, "failed to parse params file: {}", err),
        }
    }
}

fn load_params(path: &str) -> Result<PlanetParameters, ParamsError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    // Base parameters: file if given, otherwise a dense rocky demo world
    let mut params = match args.params {
        Some(ref path) => match load_params(path) {
            Ok(params) => {
                println!("Loaded parameters from: {}", path);
                params
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => PlanetParameters {
            mass: 6.0,
            ..Default::default()
        },
    };

    // Seed priority: explicit flag, then file value, then random
    if let Some(seed) = args.seed {
        params.seed = seed;
    } else if args.params.is_none() {
        params.seed = rand::random();
    }

    if let Some(mass) = args.mass {
        params.mass = mass;
    }
    if let Some(radius) = args.radius {
        params.radius = radius;
    }
    if let Some(temperature) = args.temperature {
        params.temperature = temperature;
    }
    if let Some(soil_type) = args.soil_type {
        params.soil_type = soil_type;
    }
    if let Some(soil_texture) = args.soil_texture {
        params.soil_texture = soil_texture;
    }
    if let Some(water_level) = args.water_level {
        params.water_level = water_level;
    }
    if let Some(roughness) = args.roughness {
        params.surface_roughness = roughness;
    }
    if let Some(mountain_height) = args.mountain_height {
        params.mountain_height = mountain_height;
    }
    if let Some(erosion) = args.erosion {
        params.terrain_erosion = erosion;
    }
    if let Some(cloud_count) = args.cloud_count {
        params.cloud_count = cloud_count;
    }
    if let Some(atmosphere) = args.atmosphere {
        params.atmosphere_strength = atmosphere;
    }

    // Choosing a biome snaps temperature, water and roughness into its ranges
    if let Some(ref biome) = args.biome {
        params.biome = biome.clone();
        params = biomes::clamp_to_biome(&params);
        println!("Clamped parameters to biome: {}", params.biome);
    }

    let kind = params.kind();
    println!("Generating planet with seed: {}", params.seed);
    println!("Planet class: {} (density {:.2})", kind, params.density());
    println!("Map size: {}x{}", args.width, args.height);

    println!("Generating surface...");
    let gen_start = Instant::now();
    let surface = surface::generate_latlon_surface(&params, args.width, args.height);
    println!(
        "Generated {} surface samples in {:.2?}",
        surface.len(),
        gen_start.elapsed()
    );

    if kind == PlanetKind::Terrestrial {
        let counts = surface.terrain_counts();
        let total = surface.len().max(1) as f64;
        println!(
            "Terrain: {:.1}% ocean floor, {:.1}% beach, {:.1}% regular, {:.1}% mountain",
            100.0 * counts[0] as f64 / total,
            100.0 * counts[1] as f64 / total,
            100.0 * counts[2] as f64 / total,
            100.0 * counts[3] as f64 / total,
        );
    }

    match (surface.liquid.visible, surface.liquid.kind) {
        (true, Some(liquid)) => println!(
            "Liquid: {} shell at radius {:.3}",
            liquid, surface.liquid.shell_radius
        ),
        _ => println!("Liquid: none"),
    }
    println!(
        "Atmosphere: {} (opacity {:.2}, shell radius {:.3})",
        surface.atmosphere.kind, surface.atmosphere.opacity, surface.atmosphere.shell_radius
    );
    println!("Clouds: {} patches", surface.clouds.len());
    if !params.landmarks.is_empty() {
        println!(
            "Landmarks: {} supplied, {} apply to this planet class",
            params.landmarks.len(),
            surface.landmarks.len()
        );
        for lm in &params.landmarks {
            let id = lm.classification_id.as_deref().unwrap_or("-");
            println!(
                "  {} (radius {:.2}, strength {:+.2}, id {})",
                lm.influence_type, lm.influence_radius, lm.influence_strength, id
            );
        }
    }

    println!("Exporting surface map...");
    match export::export_surface_map(
        &params,
        args.width as u32,
        args.height as u32,
        &args.surface_out,
    ) {
        Ok(()) => println!("Saved surface map to: {}", args.surface_out),
        Err(e) => eprintln!("Failed to export surface map: {}", e),
    }

    println!("Exporting height map...");
    match export::export_height_map(
        &params,
        args.width as u32,
        args.height as u32,
        &args.height_out,
    ) {
        Ok(()) => println!("Saved height map to: {}", args.height_out),
        Err(e) => eprintln!("Failed to export height map: {}", e),
    }

    println!("Done in {:.2?}", start.elapsed());
}

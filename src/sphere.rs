//! Unit-sphere sampling grids
//!
//! The surface core accepts any slice of unit directions; these helpers build
//! the two grids consumers actually use: an equirectangular lat/lon grid for
//! map export and a fibonacci spiral for roughly even coverage.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Direction for one equirectangular map cell. `u` runs west to east and `v`
/// north to south, both in [0, 1).
pub fn latlon_dir(u: f32, v: f32) -> Vec3 {
    let lon = u * TAU - PI;
    let lat = PI / 2.0 - v * PI;
    Vec3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin())
}

/// Row-major equirectangular direction grid, one direction per map cell,
/// sampled at cell centers.
pub fn latlon_grid(width: usize, height: usize) -> Vec<Vec3> {
    let mut dirs = Vec::with_capacity(width * height);
    for y in 0..height {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            dirs.push(latlon_dir(u, v));
        }
    }
    dirs
}

/// Golden-angle spiral giving `count` roughly evenly spaced directions.
pub fn fibonacci_sphere(count: usize) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
            let ring = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlon_grid_shape_and_unit_length() {
        let dirs = latlon_grid(16, 8);
        assert_eq!(dirs.len(), 128);
        for dir in &dirs {
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_latlon_poles_and_equator() {
        // Top row points near the north pole, middle near the equator
        let near_pole = latlon_dir(0.5, 0.0);
        assert!(near_pole.y > 0.999);

        let equator = latlon_dir(0.5, 0.5);
        assert!(equator.y.abs() < 1e-6);
    }

    #[test]
    fn test_fibonacci_sphere_covers_both_hemispheres() {
        let dirs = fibonacci_sphere(500);
        assert_eq!(dirs.len(), 500);

        let mut min_y = 1.0f32;
        let mut max_y = -1.0f32;
        for dir in &dirs {
            assert!((dir.length() - 1.0).abs() < 1e-5);
            min_y = min_y.min(dir.y);
            max_y = max_y.max(dir.y);
        }
        assert!(min_y < -0.99);
        assert!(max_y > 0.99);
    }

    #[test]
    fn test_fibonacci_points_are_distinct() {
        let dirs = fibonacci_sphere(64);
        for (i, a) in dirs.iter().enumerate() {
            for b in dirs.iter().skip(i + 1) {
                assert!((*a - *b).length() > 1e-4);
            }
        }
    }
}

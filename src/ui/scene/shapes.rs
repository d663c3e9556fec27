//! Procedural wireframe geometry generators
//!
//! All generators return line segments (or points) in model space; the scene
//! rotates and projects them per frame.

use std::f32::consts::TAU;

use rand::Rng;

use super::geometry::Vec3;

pub type Segment = [Vec3; 2];

/// Uniform random points inside a cube of the given side length
pub fn scatter<R: Rng>(rng: &mut R, count: usize, spread: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * spread,
                (rng.random::<f32>() - 0.5) * spread,
                (rng.random::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}

/// Torus wireframe: rings around the tube plus rings along it
pub fn torus(major_radius: f32, minor_radius: f32, radial: usize, tubular: usize) -> Vec<Segment> {
    let vertex = |u: usize, v: usize| {
        let theta = (u % tubular) as f32 / tubular as f32 * TAU;
        let phi = (v % radial) as f32 / radial as f32 * TAU;
        let r = major_radius + minor_radius * phi.cos();
        Vec3::new(
            r * theta.cos(),
            r * theta.sin(),
            minor_radius * phi.sin(),
        )
    };

    let mut segments = Vec::with_capacity(radial * tubular * 2);
    for u in 0..tubular {
        for v in 0..radial {
            segments.push([vertex(u, v), vertex(u + 1, v)]);
            segments.push([vertex(u, v), vertex(u, v + 1)]);
        }
    }
    segments
}

/// Sphere wireframe from latitude and longitude rings
pub fn sphere(radius: f32, latitudes: usize, longitudes: usize) -> Vec<Segment> {
    let vertex = |lat: usize, lon: usize| {
        // Latitude from pole to pole, longitude around the axis
        let theta = lat as f32 / latitudes as f32 * std::f32::consts::PI;
        let phi = (lon % longitudes) as f32 / longitudes as f32 * TAU;
        Vec3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.cos(),
            radius * theta.sin() * phi.sin(),
        )
    };

    let mut segments = Vec::new();
    for lat in 0..latitudes {
        for lon in 0..longitudes {
            segments.push([vertex(lat, lon), vertex(lat + 1, lon)]);
            if lat > 0 {
                segments.push([vertex(lat, lon), vertex(lat, lon + 1)]);
            }
        }
    }
    segments
}

/// Ground-plane grid lines in the xz plane.
///
/// Returns (center axis lines, regular lines) so they can be tinted
/// differently, matching a two-tone grid helper.
pub fn grid(size: f32, divisions: usize) -> (Vec<Segment>, Vec<Segment>) {
    let half = size / 2.0;
    let step = size / divisions as f32;

    let mut center = Vec::new();
    let mut lines = Vec::new();
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let along_x = [Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset)];
        let along_z = [Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half)];
        if i * 2 == divisions {
            center.push(along_x);
            center.push(along_z);
        } else {
            lines.push(along_x);
            lines.push(along_z);
        }
    }
    (center, lines)
}

/// The 12 edges of a unit cube centered on the origin
pub fn cube_edges() -> Vec<Segment> {
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        )
    };

    let mut segments = Vec::with_capacity(12);
    for i in 0..8 {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                segments.push([corner(i), corner(i | bit)]);
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for point in scatter(&mut rng, 200, 5.0) {
            assert!(point.x.abs() <= 2.5);
            assert!(point.y.abs() <= 2.5);
            assert!(point.z.abs() <= 2.5);
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let a = scatter(&mut StdRng::seed_from_u64(42), 10, 5.0);
        let b = scatter(&mut StdRng::seed_from_u64(42), 10, 5.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cube_has_twelve_edges() {
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for [a, b] in &edges {
            // Every edge has unit length
            let d = Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z).length();
            assert!((d - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_vertices_on_surface() {
        for [a, _] in torus(10.0, 3.0, 8, 16) {
            // Distance from the tube axis ring equals the minor radius
            let ring_distance = (a.x * a.x + a.y * a.y).sqrt() - 10.0;
            let tube = (ring_distance * ring_distance + a.z * a.z).sqrt();
            assert!((tube - 3.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_grid_line_counts() {
        let (center, lines) = grid(20.0, 20);
        assert_eq!(center.len(), 2);
        assert_eq!(lines.len(), 40);
    }
}

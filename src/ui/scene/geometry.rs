//! Minimal 3-D math for the wireframe scenes
//!
//! Points are rotated in world space, then projected with a simple pinhole
//! camera looking down the negative z axis.

use iced::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    pub fn add(self, other: Vec3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Pinhole camera on the z axis looking toward -z
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub fov_deg: f32,
}

impl Camera {
    pub const fn at_z(z: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, z),
            fov_deg: 75.0,
        }
    }

    pub const fn at(y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(0.0, y, z),
            fov_deg: 75.0,
        }
    }
}

const NEAR_PLANE: f32 = 0.1;

/// Project a world point into canvas coordinates.
///
/// Returns None for points at or behind the near plane.
pub fn project(point: Vec3, camera: &Camera, size: Size) -> Option<Point> {
    let depth = camera.position.z - point.z;
    if depth <= NEAR_PLANE {
        return None;
    }

    let focal = (size.height / 2.0) / (camera.fov_deg.to_radians() / 2.0).tan();
    let sx = size.width / 2.0 + (point.x - camera.position.x) * focal / depth;
    let sy = size.height / 2.0 - (point.y - camera.position.y) * focal / depth;
    Some(Point::new(sx, sy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_projects_to_center() {
        let camera = Camera::at_z(10.0);
        let size = Size::new(800.0, 600.0);
        let projected = project(Vec3::new(0.0, 0.0, 0.0), &camera, size).unwrap();
        assert!((projected.x - 400.0).abs() < 0.001);
        assert!((projected.y - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        let camera = Camera::at_z(5.0);
        let size = Size::new(800.0, 600.0);
        assert!(project(Vec3::new(0.0, 0.0, 6.0), &camera, size).is_none());
        assert!(project(Vec3::new(0.0, 0.0, 5.0), &camera, size).is_none());
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let rotated = v.rotate_x(0.7).rotate_y(-1.3);
        assert!((v.length() - rotated.length()).abs() < 1e-4);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let v = Vec3::new(1.5, -2.0, 0.5);
        let turned = v.rotate_y(std::f32::consts::TAU);
        assert!((v.x - turned.x).abs() < 1e-4);
        assert!((v.z - turned.z).abs() < 1e-4);
    }

    #[test]
    fn test_nearer_points_project_larger() {
        let camera = Camera::at_z(10.0);
        let size = Size::new(800.0, 600.0);
        let near = project(Vec3::new(1.0, 0.0, 5.0), &camera, size).unwrap();
        let far = project(Vec3::new(1.0, 0.0, -20.0), &camera, size).unwrap();
        assert!(near.x - 400.0 > far.x - 400.0);
    }
}

//! Ambient animated backgrounds
//!
//! Each page owns one `AmbientScene`; dropping the page state drops the
//! scene, so there is nothing to tear down by hand. The scene is a canvas
//! program: geometry is generated once with a seeded RNG, then rotated and
//! projected as a function of elapsed scene time every frame.

pub mod geometry;
pub mod shapes;

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Length, Rectangle, Renderer, Size, Theme, mouse};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ui::theme;
use geometry::{Camera, Vec3, project};
use shapes::Segment;

/// Which wireframe plays behind a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Particles,
    Torus,
    Grid,
    CubeCluster,
    Spheres,
}

/// A scattered cube instance in the cluster scene
#[derive(Debug, Clone)]
struct CubeInstance {
    position: Vec3,
    scale: f32,
    /// Cluster group; the two groups spin at different rates
    group: u8,
}

/// A bobbing wireframe sphere in the contact scene
#[derive(Debug, Clone)]
struct SphereInstance {
    segments: Vec<Segment>,
    base: Vec3,
    index: usize,
}

#[derive(Debug, Clone)]
enum SceneGeometry {
    Particles(Vec<Vec3>),
    Torus(Vec<Segment>),
    Grid {
        center: Vec<Segment>,
        lines: Vec<Segment>,
    },
    Cubes {
        edges: Vec<Segment>,
        instances: Vec<CubeInstance>,
    },
    Spheres(Vec<SphereInstance>),
}

/// Per-page animated background
#[derive(Debug)]
pub struct AmbientScene {
    kind: SceneKind,
    geometry: SceneGeometry,
    /// Elapsed scene time in seconds
    time: f32,
}

impl AmbientScene {
    pub fn new(kind: SceneKind) -> Self {
        // Seed per kind so a page always scatters the same way
        let mut rng = StdRng::seed_from_u64(kind as u64 + 1);

        let geometry = match kind {
            SceneKind::Particles => SceneGeometry::Particles(shapes::scatter(&mut rng, 600, 5.0)),
            SceneKind::Torus => SceneGeometry::Torus(shapes::torus(10.0, 3.0, 12, 48)),
            SceneKind::Grid => {
                let (center, lines) = shapes::grid(20.0, 20);
                SceneGeometry::Grid { center, lines }
            }
            SceneKind::CubeCluster => {
                let mut instances = Vec::with_capacity(16);
                for point in shapes::scatter(&mut rng, 8, 20.0) {
                    instances.push(CubeInstance {
                        position: point,
                        scale: 5.0,
                        group: 0,
                    });
                }
                for point in shapes::scatter(&mut rng, 8, 15.0) {
                    instances.push(CubeInstance {
                        position: point,
                        scale: 2.0,
                        group: 1,
                    });
                }
                SceneGeometry::Cubes {
                    edges: shapes::cube_edges(),
                    instances,
                }
            }
            SceneKind::Spheres => {
                let spheres = [
                    (2.0, Vec3::new(-10.0, 0.0, -20.0)),
                    (4.0, Vec3::new(10.0, -5.0, -15.0)),
                    (3.0, Vec3::new(0.0, 5.0, -25.0)),
                ];
                SceneGeometry::Spheres(
                    spheres
                        .into_iter()
                        .enumerate()
                        .map(|(index, (radius, base))| SphereInstance {
                            segments: shapes::sphere(radius, 8, 12),
                            base,
                            index,
                        })
                        .collect(),
                )
            }
        };

        Self {
            kind,
            geometry,
            time: 0.0,
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Advance the scene clock; called from the frame tick
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    fn camera(&self) -> Camera {
        match self.kind {
            SceneKind::Particles => Camera::at_z(2.0),
            SceneKind::Torus => Camera::at_z(30.0),
            SceneKind::Grid => Camera::at(2.0, 10.0),
            SceneKind::CubeCluster => Camera::at_z(30.0),
            SceneKind::Spheres => Camera::at_z(20.0),
        }
    }
}

fn stroke_segments<'a>(
    frame: &mut Frame,
    camera: &Camera,
    size: Size,
    segments: impl Iterator<Item = &'a Segment>,
    transform: impl Fn(Vec3) -> Vec3,
    color: Color,
) {
    let path = Path::new(|builder| {
        for [a, b] in segments {
            let (Some(from), Some(to)) = (
                project(transform(*a), camera, size),
                project(transform(*b), camera, size),
            ) else {
                continue;
            };
            builder.move_to(from);
            builder.line_to(to);
        }
    });
    frame.stroke(&path, Stroke::default().with_width(1.0).with_color(color));
}

impl<Message> Program<Message> for AmbientScene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let camera = self.camera();
        let t = self.time;

        match &self.geometry {
            SceneGeometry::Particles(points) => {
                // Matches the slow drift of the original particle field
                let ry = t * 0.12;
                let rx = t * 0.03;
                let color = Color {
                    a: 0.6,
                    ..theme::ACCENT
                };
                for point in points {
                    let world = point.rotate_x(rx).rotate_y(ry);
                    if let Some(projected) = project(world, &camera, size) {
                        frame.fill(&Path::circle(projected, 1.5), color);
                    }
                }
            }
            SceneGeometry::Torus(segments) => {
                let rx = 0.5 + t * 0.12;
                let ry = t * 0.06;
                stroke_segments(
                    &mut frame,
                    &camera,
                    size,
                    segments.iter(),
                    |p| p.rotate_x(rx).rotate_y(ry).add(Vec3::new(0.0, 0.0, -30.0)),
                    Color {
                        a: 0.2,
                        ..theme::ACCENT
                    },
                );
            }
            SceneGeometry::Grid { center, lines } => {
                let ry = t * 0.12;
                let drop = Vec3::new(0.0, -5.0, 0.0);
                stroke_segments(
                    &mut frame,
                    &camera,
                    size,
                    lines.iter(),
                    |p| p.rotate_y(ry).add(drop),
                    Color {
                        a: 0.35,
                        ..theme::ACCENT_DIM
                    },
                );
                stroke_segments(
                    &mut frame,
                    &camera,
                    size,
                    center.iter(),
                    |p| p.rotate_y(ry).add(drop),
                    Color {
                        a: 0.35,
                        ..theme::ACCENT
                    },
                );
            }
            SceneGeometry::Cubes { edges, instances } => {
                let color = Color {
                    a: 0.1,
                    ..theme::ACCENT
                };
                for instance in instances {
                    let (rx, ry) = if instance.group == 0 {
                        (t * 0.06, t * 0.06)
                    } else {
                        (t * 0.12, -t * 0.06)
                    };
                    let scale = instance.scale;
                    let position = instance.position;
                    stroke_segments(
                        &mut frame,
                        &camera,
                        size,
                        edges.iter(),
                        move |p| p.scale(scale).add(position).rotate_x(rx).rotate_y(ry),
                        color,
                    );
                }
            }
            SceneGeometry::Spheres(spheres) => {
                let color = Color {
                    a: 0.1,
                    ..theme::ACCENT
                };
                let rx = t * 0.12;
                let ry = t * 0.18;
                for sphere in spheres {
                    // Each sphere bobs on its own phase
                    let bob = (t * (sphere.index as f32 * 0.2 + 0.5)).sin() * 2.0;
                    let center = Vec3::new(sphere.base.x, bob, sphere.base.z);
                    stroke_segments(
                        &mut frame,
                        &camera,
                        size,
                        sphere.segments.iter(),
                        move |p| p.rotate_x(rx).rotate_y(ry).add(center),
                        color,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Full-bleed canvas element for a scene
pub fn view<Message: 'static>(scene: &AmbientScene) -> Element<'_, Message> {
    iced::widget::Canvas::new(scene)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_clock_accumulates() {
        let mut scene = AmbientScene::new(SceneKind::Torus);
        scene.advance(0.016);
        scene.advance(0.016);
        assert!((scene.time - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_fresh_scene_starts_at_zero() {
        // Navigating away and back constructs a new scene, clock included
        let scene = AmbientScene::new(SceneKind::Particles);
        assert_eq!(scene.time, 0.0);
    }
}

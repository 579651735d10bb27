//! Model descriptions built from primitive parts
//!
//! Each `ModelKind` expands to a list of shapes placed in model space. The
//! renderer tessellates these once at startup.

use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

/// Kinds of drawable model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Blue sports car
    PlayerCar,
    /// Red truck
    EnemyTruck,
    /// One road segment: asphalt, lane dividers, side barriers
    RoadSegment,
    /// Grass plane under everything
    Ground,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::PlayerCar,
        ModelKind::EnemyTruck,
        ModelKind::RoadSegment,
        ModelKind::Ground,
    ];

    /// Stable index for per-model tables
    pub fn index(&self) -> usize {
        match self {
            ModelKind::PlayerCar => 0,
            ModelKind::EnemyTruck => 1,
            ModelKind::RoadSegment => 2,
            ModelKind::Ground => 3,
        }
    }
}

/// Primitive shape, centered on its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { size: Vec3 },
    /// Cylinder along local y
    Cylinder { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    /// Horizontal plane (x by z) facing +y
    Plane { width: f32, depth: f32 },
}

/// A shape placed inside a model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub offset: Vec3,
    pub rotation: Quat,
    pub color: [f32; 4],
    /// Ignores lighting (headlights, taillights)
    pub emissive: bool,
}

impl Part {
    fn new(shape: Shape, offset: Vec3, color: [f32; 4]) -> Self {
        Self {
            shape,
            offset,
            rotation: Quat::IDENTITY,
            color,
            emissive: false,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    fn glowing(mut self) -> Self {
        self.emissive = true;
        self
    }
}

/// Colors for scene elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const PLAYER_BODY: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const WINDOW: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const TIRE: [f32; 4] = [0.067, 0.067, 0.067, 1.0];
    pub const HEADLIGHT: [f32; 4] = [1.0, 1.0, 0.8, 1.0];
    pub const ENEMY_BODY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ENEMY_CABIN: [f32; 4] = [0.333, 0.333, 0.333, 1.0];
    pub const TAILLIGHT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ASPHALT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const DIVIDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BARRIER: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
    pub const GRASS: [f32; 4] = [0.2, 0.6, 0.2, 1.0];
}

const WHEEL_SEGMENTS: u32 = 16;
const LIGHT_SEGMENTS: u32 = 8;

/// Expand a model into its parts
///
/// Road geometry depends on the configured road length and lane width.
pub fn parts(kind: ModelKind, road_length: f32, lane_width: f32) -> Vec<Part> {
    match kind {
        ModelKind::PlayerCar => player_car(),
        ModelKind::EnemyTruck => enemy_truck(),
        ModelKind::RoadSegment => road_segment(road_length, lane_width),
        ModelKind::Ground => vec![Part::new(
            Shape::Plane {
                width: crate::consts::GROUND_SIZE,
                depth: crate::consts::GROUND_SIZE,
            },
            Vec3::new(0.0, -0.55, 0.0),
            colors::GRASS,
        )],
    }
}

fn player_car() -> Vec<Part> {
    let mut parts = vec![
        // Chassis
        Part::new(
            Shape::Cuboid {
                size: Vec3::new(2.0, 0.8, 4.0),
            },
            Vec3::new(0.0, 0.4, 0.0),
            colors::PLAYER_BODY,
        ),
        // Sloped hood
        Part::new(
            Shape::Cuboid {
                size: Vec3::new(1.8, 0.4, 1.5),
            },
            Vec3::new(0.0, 0.2, 1.75),
            colors::PLAYER_BODY,
        )
        .rotated(Quat::from_rotation_x(-FRAC_PI_6)),
        // Cabin
        Part::new(
            Shape::Cuboid {
                size: Vec3::new(1.6, 0.6, 1.2),
            },
            Vec3::new(0.0, 0.7, 0.3),
            colors::WINDOW,
        ),
    ];

    for i in 0..4 {
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let end = if i < 2 { 1.0 } else { -1.0 };
        parts.push(wheel(0.3, 0.4, Vec3::new(side * 1.1, 0.2, end * 1.2)));
    }

    for side in [-1.0, 1.0] {
        parts.push(
            Part::new(
                Shape::Sphere {
                    radius: 0.2,
                    segments: LIGHT_SEGMENTS,
                },
                Vec3::new(side * 0.8, 0.2, 2.2),
                colors::HEADLIGHT,
            )
            .glowing(),
        );
    }

    parts
}

fn enemy_truck() -> Vec<Part> {
    let mut parts = vec![
        Part::new(
            Shape::Cuboid {
                size: Vec3::new(2.5, 1.2, 4.5),
            },
            Vec3::new(0.0, 0.6, 0.0),
            colors::ENEMY_BODY,
        ),
        Part::new(
            Shape::Cuboid {
                size: Vec3::new(2.0, 1.5, 1.5),
            },
            Vec3::new(0.0, 1.35, 1.5),
            colors::ENEMY_CABIN,
        ),
    ];

    // Front, middle and rear axles
    for i in 0..6 {
        let side = if i % 2 == 0 { -1.3 } else { 1.3 };
        let z = match i / 2 {
            0 => 1.5,
            1 => 0.0,
            _ => -1.5,
        };
        parts.push(wheel(0.4, 0.5, Vec3::new(side, 0.25, z)));
    }

    for side in [-1.0, 1.0] {
        parts.push(
            Part::new(
                Shape::Sphere {
                    radius: 0.2,
                    segments: LIGHT_SEGMENTS,
                },
                Vec3::new(side * 1.1, 0.6, -2.3),
                colors::TAILLIGHT,
            )
            .glowing(),
        );
    }

    parts
}

fn wheel(radius: f32, width: f32, offset: Vec3) -> Part {
    Part::new(
        Shape::Cylinder {
            radius,
            height: width,
            segments: WHEEL_SEGMENTS,
        },
        offset,
        colors::TIRE,
    )
    .rotated(Quat::from_rotation_z(FRAC_PI_2))
}

fn road_segment(road_length: f32, lane_width: f32) -> Vec<Part> {
    let half = road_length / 2.0;
    let mut parts = vec![Part::new(
        Shape::Plane {
            width: lane_width * 3.0,
            depth: road_length,
        },
        Vec3::new(0.0, -0.5, half),
        colors::ASPHALT,
    )];

    for side in [-1.0, 1.0] {
        parts.push(Part::new(
            Shape::Plane {
                width: 0.2,
                depth: road_length,
            },
            Vec3::new(side * lane_width / 2.0, -0.49, half),
            colors::DIVIDER,
        ));
    }

    for side in [-1.0, 1.0] {
        parts.push(Part::new(
            Shape::Cuboid {
                size: Vec3::new(0.5, 1.0, road_length),
            },
            Vec3::new(side * (lane_width * 1.5 + 0.25), 0.0, half),
            colors::BARRIER,
        ));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_counts() {
        // chassis + hood + cabin + 4 wheels + 2 headlights
        assert_eq!(parts(ModelKind::PlayerCar, 300.0, 4.0).len(), 9);
        // chassis + cabin + 6 wheels + 2 taillights
        assert_eq!(parts(ModelKind::EnemyTruck, 300.0, 4.0).len(), 10);
        // asphalt + 2 dividers + 2 barriers
        assert_eq!(parts(ModelKind::RoadSegment, 300.0, 4.0).len(), 5);
        assert_eq!(parts(ModelKind::Ground, 300.0, 4.0).len(), 1);
    }

    #[test]
    fn test_road_spans_segment_length() {
        let road = parts(ModelKind::RoadSegment, 120.0, 4.0);
        match road[0].shape {
            Shape::Plane { width, depth } => {
                assert_eq!(width, 12.0);
                assert_eq!(depth, 120.0);
            }
            other => panic!("unexpected asphalt shape {:?}", other),
        }
        // Segment starts at its origin and extends forward
        assert_eq!(road[0].offset.z, 60.0);
    }

    #[test]
    fn test_model_indices_are_unique() {
        let mut seen = [false; ModelKind::ALL.len()];
        for kind in ModelKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }
}

//! Tessellation of model parts into triangle lists

use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;
use crate::scene::{Part, Shape};

/// Triangles for a whole model, in model space
pub fn model_vertices(parts: &[Part]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for part in parts {
        let transform = Mat4::from_rotation_translation(part.rotation, part.offset);
        let mut color = part.color;
        color[3] = if part.emissive { 1.0 } else { 0.0 };

        let local = match part.shape {
            Shape::Cuboid { size } => cuboid(size),
            Shape::Cylinder {
                radius,
                height,
                segments,
            } => cylinder(radius, height, segments),
            Shape::Sphere { radius, segments } => sphere(radius, segments),
            Shape::Plane { width, depth } => plane(width, depth),
        };

        vertices.extend(local.into_iter().map(|(p, n)| {
            let p = transform.transform_point3(p);
            let n = transform.transform_vector3(n).normalize_or_zero();
            Vertex::new(p.to_array(), n.to_array(), color)
        }));
    }
    vertices
}

type RawVertex = (Vec3, Vec3);

fn quad(out: &mut Vec<RawVertex>, corners: [Vec3; 4], normal: Vec3) {
    out.push((corners[0], normal));
    out.push((corners[1], normal));
    out.push((corners[2], normal));
    out.push((corners[2], normal));
    out.push((corners[3], normal));
    out.push((corners[0], normal));
}

/// Axis-aligned box centered on the origin
pub fn cuboid(size: Vec3) -> Vec<RawVertex> {
    let h = size / 2.0;
    let mut out = Vec::with_capacity(36);

    // (normal, tangent u, tangent v) per face
    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::X, Vec3::Y),
    ];

    for (n, u, v) in faces {
        let center = n * h;
        let du = u * h;
        let dv = v * h;
        quad(
            &mut out,
            [
                center - du - dv,
                center + du - dv,
                center + du + dv,
                center - du + dv,
            ],
            n,
        );
    }

    out
}

/// Capped cylinder along local y
pub fn cylinder(radius: f32, height: f32, segments: u32) -> Vec<RawVertex> {
    let segments = segments.max(3);
    let half = height / 2.0;
    let mut out = Vec::with_capacity(segments as usize * 12);

    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * TAU;
        let d1 = Vec3::new(a1.cos(), 0.0, a1.sin());
        let d2 = Vec3::new(a2.cos(), 0.0, a2.sin());

        // Side
        let b1 = d1 * radius - Vec3::Y * half;
        let b2 = d2 * radius - Vec3::Y * half;
        let t1 = d1 * radius + Vec3::Y * half;
        let t2 = d2 * radius + Vec3::Y * half;
        let side = ((d1 + d2) / 2.0).normalize();
        quad(&mut out, [b1, b2, t2, t1], side);

        // Caps
        out.push((Vec3::Y * half, Vec3::Y));
        out.push((t2, Vec3::Y));
        out.push((t1, Vec3::Y));
        out.push((-Vec3::Y * half, Vec3::NEG_Y));
        out.push((b1, Vec3::NEG_Y));
        out.push((b2, Vec3::NEG_Y));
    }

    out
}

/// UV sphere
pub fn sphere(radius: f32, segments: u32) -> Vec<RawVertex> {
    let segments = segments.max(3);
    let rings = segments.max(2);
    let mut out = Vec::with_capacity((segments * rings * 6) as usize);

    let point = |ring: u32, seg: u32| -> Vec3 {
        let phi = (ring as f32 / rings as f32) * PI;
        let theta = (seg as f32 / segments as f32) * TAU;
        Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    };

    for r in 0..rings {
        for s in 0..segments {
            let corners = [
                point(r, s),
                point(r + 1, s),
                point(r + 1, s + 1),
                point(r, s + 1),
            ];
            for idx in [0, 1, 2, 2, 3, 0] {
                let n = corners[idx];
                out.push((n * radius, n));
            }
        }
    }

    out
}

/// Horizontal plane facing +y
pub fn plane(width: f32, depth: f32) -> Vec<RawVertex> {
    let hw = width / 2.0;
    let hd = depth / 2.0;
    let mut out = Vec::with_capacity(6);
    quad(
        &mut out,
        [
            Vec3::new(-hw, 0.0, -hd),
            Vec3::new(hw, 0.0, -hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(-hw, 0.0, hd),
        ],
        Vec3::Y,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::model::{self, ModelKind};

    #[test]
    fn test_cuboid_extent() {
        let verts = cuboid(Vec3::new(2.0, 1.0, 4.0));
        assert_eq!(verts.len(), 36);
        let max = verts.iter().fold(Vec3::splat(f32::MIN), |m, (p, _)| m.max(*p));
        let min = verts.iter().fold(Vec3::splat(f32::MAX), |m, (p, _)| m.min(*p));
        assert_eq!(max, Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(min, Vec3::new(-1.0, -0.5, -2.0));
    }

    #[test]
    fn test_cuboid_normals_point_outward() {
        for (p, n) in cuboid(Vec3::ONE) {
            assert!(p.dot(n) > 0.0);
        }
    }

    #[test]
    fn test_triangle_counts() {
        assert_eq!(cylinder(0.3, 0.4, 16).len(), 16 * 12);
        assert_eq!(sphere(0.2, 8).len(), 8 * 8 * 6);
        assert_eq!(plane(1.0, 1.0).len(), 6);
    }

    #[test]
    fn test_emissive_flag_in_alpha() {
        let verts = model_vertices(&model::parts(ModelKind::PlayerCar, 300.0, 4.0));
        assert_eq!(verts.len() % 3, 0);
        assert!(verts.iter().any(|v| v.color[3] == 1.0));
        assert!(verts.iter().any(|v| v.color[3] == 0.0));
    }

    #[test]
    fn test_part_offset_applied() {
        let verts = model_vertices(&model::parts(ModelKind::Ground, 300.0, 4.0));
        assert!(verts.iter().all(|v| (v.position[1] + 0.55).abs() < 1e-6));
    }
}

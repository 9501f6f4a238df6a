//! Polygon primitives and planar generators

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use tracing::warn;

use crate::vertex::{Material, Vertex};

/// Planar convex polygon: a material plus an ordered point list.
///
/// Winding carries front-face semantics. Convexity and planarity are
/// assumed, never validated; malformed input yields malformed triangles
/// downstream (garbage in, garbage out).
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Polygon material
    pub material: Material,
    /// Ordered points, at least 3
    pub points: Vec<Vertex>,
}

impl Polygon {
    /// Apply an affine transform to every point
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            material: self.material,
            points: self.points.iter().map(|p| p.transform(m)).collect(),
        }
    }

    /// Reverse the facing: every normal is negated and the point order
    /// reversed, so winding stays consistent with the flipped normals.
    pub fn flipped(&self) -> Self {
        Self {
            material: self.material,
            points: self.points.iter().rev().map(|p| p.flipped()).collect(),
        }
    }

    /// Build a polygon from bare positions, deriving one shared normal
    /// from the cross product of the first three points.
    ///
    /// This is the sole source of analytic per-polygon normals for side
    /// and derived-quad faces.
    ///
    /// # Panics
    /// Panics if fewer than three points are given.
    pub fn from_points(material: Material, points: &[Vec3]) -> Self {
        let normal = triangle_normal(points[0], points[1], points[2]);
        Self {
            material,
            points: points.iter().map(|&p| Vertex::new(p, normal)).collect(),
        }
    }

    /// Regular `segments`-gon on a circle of `radius` at height `y`.
    ///
    /// Points start at angle 0 with step 2π/segments; all share the
    /// downward normal (0, -1, 0), the bottom-cap default orientation.
    /// `segments < 3` is degenerate geometry and is clamped to 3.
    pub fn regular(material: Material, segments: u32, radius: f32, y: f32) -> Self {
        let segments = if segments < 3 {
            warn!("Polygon::regular: segments must be >= 3, clamping to 3");
            3
        } else {
            segments
        };

        let arc = TAU / segments as f32;
        let points = (0..segments)
            .map(|i| {
                let theta = arc * i as f32;
                Vertex::new(
                    Vec3::new(theta.cos() * radius, y, theta.sin() * radius),
                    Vec3::NEG_Y,
                )
            })
            .collect();

        Self { material, points }
    }
}

/// Unit cross-product normal of a triangle's corners
pub(crate) fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize()
}

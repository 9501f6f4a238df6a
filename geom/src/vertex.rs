//! Vertex primitives
//!
//! A vertex carries a position and a normal direction. All operations are
//! pure: they return a new value and never mutate their input.

use glam::{Mat4, Vec3};

/// Opaque per-polygon material attribute (three channels, RGB by
/// convention).
///
/// Treated as a vertex attribute during compilation: corners with equal
/// position and normal but different materials never share an output
/// vertex.
pub type Material = [f32; 3];

/// Position plus normal direction.
///
/// The normal is not required to be unit length; it is carried through
/// transforms as-is and only renormalized by quantized packing (see
/// [`crate::compile::NormalPacking`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Vertex position
    pub position: Vec3,
    /// Normal direction
    pub normal: Vec3,
}

impl Vertex {
    /// Create a vertex from a position and a normal
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Apply an affine transform.
    ///
    /// The position is transformed as a point (w = 1); the normal is
    /// transformed by the linear part only (w = 0), so translation never
    /// affects it.
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            position: m.transform_point3(self.position),
            normal: m.transform_vector3(self.normal),
        }
    }

    /// Negate the normal, leaving the position unchanged
    pub fn flipped(&self) -> Self {
        Self {
            position: self.position,
            normal: -self.normal,
        }
    }

    /// Offset the position, leaving the normal unchanged
    pub fn translated(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self {
            position: self.position + Vec3::new(dx, dy, dz),
            normal: self.normal,
        }
    }

    /// Linearly interpolate all six channels between two vertices
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            position: a.position.lerp(b.position, t),
            normal: a.normal.lerp(b.normal, t),
        }
    }

    /// Interpolate a single position channel (0 = x, 1 = y, 2 = z),
    /// taking every other channel from `a`.
    ///
    /// Supports partial smoothing where only one axis is blended between
    /// two sides.
    pub fn lerp_axis(a: Self, b: Self, axis: usize, t: f32) -> Self {
        let mut position = a.position;
        position[axis] = a.position[axis] + (b.position[axis] - a.position[axis]) * t;
        Self {
            position,
            normal: a.normal,
        }
    }
}

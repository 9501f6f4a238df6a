//! Solid generation and composition
//!
//! A solid is a collection of polygons forming one logical shape; no
//! adjacency is stored, connectivity is implicit in shared vertex
//! positions. Generators here build parametric shapes from the polygon
//! primitives, and composition applies affine transforms to whole solids.

use glam::{Mat4, Vec3};

use crate::polygon::Polygon;
use crate::vertex::{Material, Vertex};

/// One logical shape: a collection of polygons.
#[derive(Clone, Debug, Default)]
pub struct Solid {
    /// Polygons making up the shape
    pub polygons: Vec<Polygon>,
}

impl Solid {
    /// Wrap a polygon list into a solid
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Apply an affine transform to every polygon
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.transform(m)).collect(),
        }
    }
}

/// Connect a bottom ring and an already-flipped top ring of equal length
/// with one quad per edge.
///
/// Each quad is rebuilt through [`Polygon::from_points`], so its normal is
/// the analytic cross-product normal of that quad rather than a normal
/// inherited from the rings; side faces are flat shaded by default.
///
/// # Panics
/// Panics if the rings have different lengths.
pub fn sides(material: Material, bottom: &Polygon, top: &Polygon) -> Vec<Polygon> {
    let n = bottom.points.len();
    assert_eq!(n, top.points.len(), "ring lengths must match");

    (0..n)
        .map(|i| {
            let quad = [
                bottom.points[i].position,
                top.points[n - i - 1].position,
                top.points[n - ((i + 1) % n) - 1].position,
                bottom.points[(i + 1) % n].position,
            ];
            Polygon::from_points(material, &quad)
        })
        .collect()
}

/// Smooth a closed ring of side quads.
///
/// One left-to-right ring pass with a single-quad lookback: corners 0 and
/// 1 of each quad are blended (t = 0.5) with corners 3 and 2 of the
/// previous quad, and corners 2 and 3 with corners 1 and 0 of the next.
/// Each corner is blended with exactly one neighbor; this is not a
/// symmetric two-sided average, and the difference is observable in
/// rendered output. Caps are unaffected.
pub fn smooth_side_quads(quads: &[Polygon]) -> Vec<Polygon> {
    let n = quads.len();
    (0..n)
        .map(|i| {
            let cur = &quads[i].points;
            let prev = &quads[(i + n - 1) % n].points;
            let next = &quads[(i + 1) % n].points;
            Polygon {
                material: quads[i].material,
                points: vec![
                    Vertex::lerp(cur[0], prev[3], 0.5),
                    Vertex::lerp(cur[1], prev[2], 0.5),
                    Vertex::lerp(cur[2], next[1], 0.5),
                    Vertex::lerp(cur[3], next[0], 0.5),
                ],
            }
        })
        .collect()
}

/// Unit-radius cylinder between y = -1 and y = 1.
///
/// Composes a bottom cap, a flipped top cap, and `segments` side quads.
/// With `smoothed` set, side quads are blended across neighbors for
/// continuous shading while both caps stay flat.
///
/// Polygon order is `[bottom, top, sides...]`.
pub fn cylinder(material: Material, segments: u32, smoothed: bool) -> Solid {
    let top = Polygon::regular(material, segments, 1.0, 1.0).flipped();
    let bottom = Polygon::regular(material, segments, 1.0, -1.0);

    let side_quads = sides(material, &bottom, &top);
    let side_quads = if smoothed {
        smooth_side_quads(&side_quads)
    } else {
        side_quads
    };

    let mut polygons = vec![bottom, top];
    polygons.extend(side_quads);
    Solid::new(polygons)
}

/// Side quads of a prism extruded from an XZ cross-section, spanning
/// y = -1 to y = 1, one quad per cross-section edge with analytic normals.
pub fn extrude_sides(polygon: &Polygon) -> Vec<Polygon> {
    let n = polygon.points.len();
    (0..n)
        .map(|i| {
            let a = polygon.points[i].position;
            let b = polygon.points[(i + 1) % n].position;
            Polygon::from_points(
                polygon.material,
                &[
                    Vec3::new(a.x, -1.0, a.z),
                    Vec3::new(a.x, 1.0, a.z),
                    Vec3::new(b.x, 1.0, b.z),
                    Vec3::new(b.x, -1.0, b.z),
                ],
            )
        })
        .collect()
}

/// Extrude a convex XZ cross-section into a prism between y = -1 and
/// y = 1: a downward bottom cap, side quads, and an upward top cap with
/// reversed winding.
pub fn extrude(polygon: &Polygon) -> Solid {
    let side_quads = extrude_sides(polygon);

    let bottom = Polygon {
        material: polygon.material,
        points: polygon
            .points
            .iter()
            .map(|p| Vertex::new(Vec3::new(p.position.x, -1.0, p.position.z), Vec3::NEG_Y))
            .collect(),
    };
    let top = Polygon {
        material: polygon.material,
        points: polygon
            .points
            .iter()
            .rev()
            .map(|p| Vertex::new(Vec3::new(p.position.x, 1.0, p.position.z), Vec3::Y))
            .collect(),
    };

    let mut polygons = vec![bottom];
    polygons.extend(side_quads);
    polygons.push(top);
    Solid::new(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAT: Material = [0.8, 0.2, 0.1];

    /// Fan triangle count of a polygon list (input to the compiler)
    fn fan_triangles(solid: &Solid) -> usize {
        solid
            .polygons
            .iter()
            .map(|p| p.points.len().saturating_sub(2))
            .sum()
    }

    #[test]
    fn test_cylinder_polygon_counts() {
        let solid = cylinder(MAT, 8, false);

        // Two caps plus one quad per segment
        assert_eq!(solid.polygons.len(), 10);
        assert_eq!(solid.polygons[0].points.len(), 8);
        assert_eq!(solid.polygons[1].points.len(), 8);
        for quad in &solid.polygons[2..] {
            assert_eq!(quad.points.len(), 4);
        }
    }

    #[test]
    fn test_cylinder_fan_triangle_count() {
        // 2 caps x 6 fan triangles + 8 quads x 2 = 28
        let solid = cylinder(MAT, 8, false);
        assert_eq!(fan_triangles(&solid), 28);
    }

    #[test]
    fn test_cylinder_caps_face_away_from_each_other() {
        let solid = cylinder(MAT, 8, false);
        let bottom = &solid.polygons[0];
        let top = &solid.polygons[1];

        for point in &bottom.points {
            assert_eq!(point.normal, Vec3::NEG_Y);
        }
        for point in &top.points {
            assert_eq!(point.normal, Vec3::Y);
        }
    }

    #[test]
    fn test_cylinder_side_normals_point_outward() {
        let solid = cylinder(MAT, 8, false);

        for quad in &solid.polygons[2..] {
            let normal = quad.points[0].normal;
            assert!(normal.y.abs() < 1e-6);

            let mid: Vec3 = quad.points.iter().map(|p| p.position).sum::<Vec3>() / 4.0;
            let radial = Vec3::new(mid.x, 0.0, mid.z);
            assert!(normal.dot(radial) > 0.0);
        }
    }

    #[test]
    fn test_smooth_side_quads_blend_with_neighbors() {
        let top = Polygon::regular(MAT, 8, 1.0, 1.0).flipped();
        let bottom = Polygon::regular(MAT, 8, 1.0, -1.0);
        let flat = sides(MAT, &bottom, &top);

        let smoothed = smooth_side_quads(&flat);
        assert_eq!(smoothed.len(), flat.len());

        for i in 0..flat.len() {
            let prev = &flat[(i + flat.len() - 1) % flat.len()];
            let next = &flat[(i + 1) % flat.len()];

            let expected0 = Vertex::lerp(flat[i].points[0], prev.points[3], 0.5);
            let expected3 = Vertex::lerp(flat[i].points[3], next.points[0], 0.5);

            assert_eq!(smoothed[i].points[0], expected0);
            assert_eq!(smoothed[i].points[3], expected3);
            assert_eq!(smoothed[i].material, flat[i].material);
        }
    }

    #[test]
    fn test_solid_transform_moves_positions_not_normals() {
        let solid = cylinder(MAT, 6, false);
        let moved = solid.transform(&Mat4::from_translation(Vec3::new(0.0, 10.0, 0.0)));

        for (before, after) in solid.polygons.iter().zip(&moved.polygons) {
            for (pb, pa) in before.points.iter().zip(&after.points) {
                assert_eq!(pa.position.y, pb.position.y + 10.0);
                assert_eq!(pa.normal, pb.normal);
            }
        }
    }

    #[test]
    fn test_extrude_counts_and_caps() {
        let cross_section = Polygon::regular(MAT, 5, 1.0, 0.0);
        let prism = extrude(&cross_section);

        // Bottom cap, 5 side quads, top cap
        assert_eq!(prism.polygons.len(), 7);

        for point in &prism.polygons[0].points {
            assert_eq!(point.normal, Vec3::NEG_Y);
            assert_eq!(point.position.y, -1.0);
        }
        for point in &prism.polygons[6].points {
            assert_eq!(point.normal, Vec3::Y);
            assert_eq!(point.position.y, 1.0);
        }
        for quad in &prism.polygons[1..6] {
            assert_eq!(quad.points.len(), 4);
            assert!(quad.points[0].normal.y.abs() < 1e-6);
        }
    }
}

//! Triangulation, vertex deduplication, and buffer packing
//!
//! Compiles an ordered scene of solids into one interleaved vertex buffer
//! and one u16 index buffer. Each polygon is fan-triangulated in encounter
//! order, corners are deduplicated by exact attribute equality on their
//! packed representation, degenerate triangles are dropped, and output
//! indices are assigned in first-use order across the whole scene.
//!
//! The pass holds no state between invocations: compiling the same scene
//! twice yields identical buffers.

use hashbrown::HashMap;
use thiserror::Error;

use crate::packing::{VERTEX_STRIDE, quantize_normal_snorm16};
use crate::solid::Solid;
use crate::vertex::{Material, Vertex};

/// How normal channels are packed into the output vertex rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalPacking {
    /// Raw f32 normal channels, carried exactly as generated
    #[default]
    Float,
    /// Renormalized to unit length and quantized to the signed 16-bit
    /// integer range; channels hold exact integers in [-32767, 32767]
    Snorm16,
}

/// Compiled mesh: interleaved vertex rows plus a triangle index list.
///
/// Row layout is fixed at [`VERTEX_STRIDE`] floats: position (3), normal
/// (3), material (3). Indices come in triples, one per emitted triangle,
/// in the input winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    /// Interleaved vertex rows, row-major
    pub vertices: Vec<f32>,
    /// Triangle corner indices into the vertex rows
    pub indices: Vec<u16>,
}

impl MeshBuffers {
    /// Number of vertex rows
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    /// Number of emitted triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Compilation failure.
///
/// Malformed geometry (non-convex polygons, NaN coordinates) is not
/// validated and propagates into the output; the only recoverable error
/// is exhausting the 16-bit index range.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The scene needs more output vertices than a u16 index can address
    #[error("scene needs at least {0} output vertices, exceeding the u16 index range")]
    TooManyVertices(usize),
}

/// Bit pattern of a packed vertex row, used for exact-equality dedup.
///
/// Keying on the bits of what will actually be stored guarantees that two
/// corners share an output vertex exactly when their stored rows would be
/// identical.
type VertexKey = [u32; VERTEX_STRIDE];

/// Dedup table: key -> record id, records in first-intern order.
#[derive(Default)]
struct VertexInterner {
    seen: HashMap<VertexKey, u32>,
    records: Vec<[f32; VERTEX_STRIDE]>,
}

impl VertexInterner {
    fn intern(&mut self, row: [f32; VERTEX_STRIDE]) -> u32 {
        let key = row.map(f32::to_bits);
        *self.seen.entry(key).or_insert_with(|| {
            let id = self.records.len() as u32;
            self.records.push(row);
            id
        })
    }
}

fn make_row(vertex: &Vertex, material: Material, packing: NormalPacking) -> [f32; VERTEX_STRIDE] {
    let p = vertex.position;
    let n = match packing {
        NormalPacking::Float => vertex.normal,
        NormalPacking::Snorm16 => quantize_normal_snorm16(vertex.normal),
    };
    [
        p.x,
        p.y,
        p.z,
        n.x,
        n.y,
        n.z,
        material[0],
        material[1],
        material[2],
    ]
}

/// Compile an ordered scene of solids into a single mesh buffer pair.
///
/// Fan-triangulates every polygon (convexity assumed), deduplicates
/// corners by exact packed-attribute equality, silently drops triangles
/// with two identical corners, and assigns output indices in first-use
/// order. Winding is preserved from the input polygons.
pub fn compile_scene(solids: &[Solid], packing: NormalPacking) -> Result<MeshBuffers, CompileError> {
    let mut interner = VertexInterner::default();
    let mut triangles: Vec<[u32; 3]> = Vec::new();

    for solid in solids {
        for polygon in &solid.polygons {
            let points = &polygon.points;
            for i in 2..points.len() {
                let a = interner.intern(make_row(&points[0], polygon.material, packing));
                let b = interner.intern(make_row(&points[i - 1], polygon.material, packing));
                let c = interner.intern(make_row(&points[i], polygon.material, packing));
                if a != b && a != c && b != c {
                    triangles.push([a, b, c]);
                }
            }
        }
    }

    // Second phase: assign output indices in first-use order and emit the
    // packed rows alongside.
    let mut assigned: Vec<Option<u16>> = vec![None; interner.records.len()];
    let mut vertices: Vec<f32> = Vec::new();
    let mut indices: Vec<u16> = Vec::with_capacity(triangles.len() * 3);
    let mut used: usize = 0;

    for triangle in &triangles {
        for &corner in triangle {
            let slot = &mut assigned[corner as usize];
            let index = match *slot {
                Some(index) => index,
                None => {
                    let index = u16::try_from(used)
                        .map_err(|_| CompileError::TooManyVertices(used + 1))?;
                    *slot = Some(index);
                    used += 1;
                    vertices.extend_from_slice(&interner.records[corner as usize]);
                    index
                }
            };
            indices.push(index);
        }
    }

    Ok(MeshBuffers { vertices, indices })
}

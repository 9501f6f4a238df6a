//! Wavefront OBJ export for compiled meshes
//!
//! Debug and asset-pipeline surface: writes the packed vertex rows back
//! out as `v`/`vn`/`f v//vn` records. Materials are not part of the OBJ
//! output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::compile::{MeshBuffers, NormalPacking};
use crate::packing::{SNORM16_SCALE, VERTEX_STRIDE};

/// Write a compiled mesh as a Wavefront OBJ file.
///
/// `packing` must match the mode the mesh was compiled with; snorm16
/// normal channels are rescaled back into [-1, 1] on write.
pub fn write_obj(mesh: &MeshBuffers, packing: NormalPacking, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "# polyforge mesh export")?;
    writeln!(
        w,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    let normal_scale = match packing {
        NormalPacking::Float => 1.0,
        NormalPacking::Snorm16 => 1.0 / SNORM16_SCALE,
    };

    for row in mesh.vertices.chunks_exact(VERTEX_STRIDE) {
        writeln!(w, "v {} {} {}", row[0], row[1], row[2])?;
    }
    for row in mesh.vertices.chunks_exact(VERTEX_STRIDE) {
        writeln!(
            w,
            "vn {} {} {}",
            row[3] * normal_scale,
            row[4] * normal_scale,
            row[5] * normal_scale
        )?;
    }
    for triangle in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based
        writeln!(
            w,
            "f {0}//{0} {1}//{1} {2}//{2}",
            triangle[0] as u32 + 1,
            triangle[1] as u32 + 1,
            triangle[2] as u32 + 1
        )?;
    }

    w.flush()
}

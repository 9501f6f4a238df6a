//! mesh-export - Polyforge mesh export tool
//!
//! Generates procedural scenes with the geometry core, compiles them to
//! GPU-ready buffers, and writes Wavefront OBJ files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use glam::{Mat4, Vec3};
use std::path::PathBuf;

use polyforge_geom::{
    MeshBuffers, NormalPacking, Polygon, Solid, compile_scene, cylinder, extrude, write_obj,
};

#[derive(Parser)]
#[command(name = "mesh-export")]
#[command(about = "Polyforge mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a single cylinder
    Cylinder {
        /// Output .obj file
        #[arg(short, long, default_value = "cylinder.obj")]
        output: PathBuf,

        /// Number of radial segments
        #[arg(short, long, default_value_t = 16)]
        segments: u32,

        /// Smooth side shading instead of flat quads
        #[arg(long)]
        smoothed: bool,

        /// Quantize normals to snorm16
        #[arg(short, long)]
        quantize: bool,
    },

    /// Export the built-in demo scene
    Demo {
        /// Output .obj file
        #[arg(short, long, default_value = "demo.obj")]
        output: PathBuf,

        /// Quantize normals to snorm16
        #[arg(short, long)]
        quantize: bool,
    },

    /// Print buffer statistics for a generated cylinder
    Info {
        /// Number of radial segments
        #[arg(short, long, default_value_t = 16)]
        segments: u32,

        /// Smooth side shading instead of flat quads
        #[arg(long)]
        smoothed: bool,
    },
}

fn packing_mode(quantize: bool) -> NormalPacking {
    if quantize {
        NormalPacking::Snorm16
    } else {
        NormalPacking::Float
    }
}

/// A small assembly: two columns, a crossbeam, and a pentagonal pedestal.
fn demo_scene() -> Vec<Solid> {
    let column = cylinder([0.7, 0.7, 0.75], 12, true);
    let beam = cylinder([0.6, 0.5, 0.4], 8, false);
    let pedestal = extrude(&Polygon::regular([0.4, 0.4, 0.45], 5, 3.0, 0.0));

    vec![
        column.transform(&Mat4::from_translation(Vec3::new(-2.0, 2.0, 0.0))),
        column.transform(&Mat4::from_translation(Vec3::new(2.0, 2.0, 0.0))),
        beam.transform(
            &(Mat4::from_translation(Vec3::new(0.0, 3.2, 0.0))
                * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2)
                * Mat4::from_scale(Vec3::new(0.4, 2.4, 0.4))),
        ),
        pedestal.transform(&Mat4::from_scale(Vec3::new(1.0, 0.25, 1.0))),
    ]
}

fn report(mesh: &MeshBuffers) {
    tracing::info!(
        "{} vertices, {} triangles, {} vertex bytes, {} index bytes",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len(),
    );
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cylinder {
            output,
            segments,
            smoothed,
            quantize,
        } => {
            let packing = packing_mode(quantize);
            let scene = [cylinder([0.8, 0.8, 0.8], segments, smoothed)];
            let mesh = compile_scene(&scene, packing)?;
            report(&mesh);
            write_obj(&mesh, packing, &output)?;
            tracing::info!("Wrote {:?}", output);
        }

        Commands::Demo { output, quantize } => {
            let packing = packing_mode(quantize);
            let mesh = compile_scene(&demo_scene(), packing)?;
            report(&mesh);
            write_obj(&mesh, packing, &output)?;
            tracing::info!("Wrote {:?}", output);
        }

        Commands::Info { segments, smoothed } => {
            let scene = [cylinder([0.8, 0.8, 0.8], segments, smoothed)];
            let mesh = compile_scene(&scene, NormalPacking::Snorm16)?;
            report(&mesh);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_compiles_in_bounds() {
        let mesh = compile_scene(&demo_scene(), NormalPacking::Snorm16).unwrap();

        assert!(mesh.triangle_count() > 0);
        let vertex_count = mesh.vertex_count();
        for &index in &mesh.indices {
            assert!((index as usize) < vertex_count);
        }
    }
}

//! Procedural solid geometry and GPU mesh compilation
//!
//! Parametric solids are generated as polygon soups with per-vertex
//! normals, composed with affine transforms, and compiled into a single
//! deduplicated indexed triangle mesh: one interleaved f32 vertex buffer
//! (position, normal, material channels) and one u16 index buffer, ready
//! for GPU upload.
//!
//! Pipeline: generators ([`solid`]) produce polygons, per-instance affine
//! transforms compose them into a scene, and [`compile::compile_scene`]
//! fan-triangulates, deduplicates, and packs the whole scene into a
//! [`compile::MeshBuffers`] pair.

pub mod compile;
pub mod export;
pub mod packing;
pub mod polygon;
pub mod solid;
pub mod vertex;

pub use compile::{CompileError, MeshBuffers, NormalPacking, compile_scene};
pub use export::write_obj;
pub use polygon::Polygon;
pub use solid::{Solid, cylinder, extrude};
pub use vertex::{Material, Vertex};

//! Vertex row packing utilities
//!
//! The compiled vertex buffer interleaves position, normal, and material
//! channels as f32 rows. Quantized packing stores exact snorm16 integers
//! in the normal channels for compact GPU-side decoding.

use glam::Vec3;

/// Material channels per vertex row
pub const MATERIAL_CHANNELS: usize = 3;

/// f32 channels per compiled vertex row
/// (position x3, normal x3, material x[`MATERIAL_CHANNELS`])
pub const VERTEX_STRIDE: usize = 6 + MATERIAL_CHANNELS;

/// Vertex row size in bytes
pub const VERTEX_STRIDE_BYTES: usize = VERTEX_STRIDE * size_of::<f32>();

/// Scale of the signed normalized 16-bit range
pub const SNORM16_SCALE: f32 = 32767.0;

/// Renormalize a direction to unit length and quantize each channel to
/// the snorm16 integer range, returned as exact integers carried in f32
/// channels: `round(component * 32767 / |normal|)`.
///
/// A zero-length input quantizes to the zero vector.
#[inline]
pub fn quantize_normal_snorm16(normal: Vec3) -> Vec3 {
    let len = normal.length();
    if len == 0.0 {
        return Vec3::ZERO;
    }

    let scale = SNORM16_SCALE / len;
    Vec3::new(
        (normal.x * scale).round(),
        (normal.y * scale).round(),
        (normal.z * scale).round(),
    )
}

//! Striding-mesh capability consumed by collision back-ends.
//!
//! A back-end walking a static mesh in its narrow-phase wants raw bulk
//! access: a base byte slice, an element count, a per-element stride and a
//! scalar type tag, for both vertices and triangle indices, plus the
//! precomputed bounds. [`StridingMesh`] is that contract. It keeps the mesh
//! types free of any particular engine's interfaces; adapters on the other
//! side (see `ironwood-physics`) read only these streams.

use crate::math::{Vec3, vec3_from_array};

use super::aabb::Aabb;
use super::index::IndexFormat;

/// Scalar type of one stream component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 32-bit float (vertex components).
    Float32,
    /// 16-bit unsigned integer (indices).
    Int16,
    /// 32-bit unsigned integer (indices).
    Int32,
}

impl ScalarType {
    /// Size in bytes of one scalar.
    pub fn size(&self) -> usize {
        match self {
            Self::Float32 | Self::Int32 => 4,
            Self::Int16 => 2,
        }
    }
}

impl From<IndexFormat> for ScalarType {
    fn from(format: IndexFormat) -> Self {
        match format {
            IndexFormat::Uint16 => Self::Int16,
            IndexFormat::Uint32 => Self::Int32,
        }
    }
}

/// Read-only vertex stream: `count` positions, `stride` bytes apart,
/// each made of three `scalar` components.
#[derive(Debug, Clone, Copy)]
pub struct VertexStream<'a> {
    pub bytes: &'a [u8],
    pub count: usize,
    pub stride: usize,
    pub scalar: ScalarType,
}

impl VertexStream<'_> {
    /// Decodes vertex `i` from the raw bytes.
    ///
    /// Returns `None` when `i` is out of range, the stream is truncated, or
    /// the scalar type is not a float type.
    pub fn vertex(&self, i: usize) -> Option<Vec3> {
        if i >= self.count || self.scalar != ScalarType::Float32 {
            return None;
        }
        let start = i.checked_mul(self.stride)?;
        let end = start.checked_add(3 * self.scalar.size())?;
        let bytes = self.bytes.get(start..end)?;
        Some(vec3_from_array(bytemuck::pod_read_unaligned::<[f32; 3]>(
            bytes,
        )))
    }

    /// Iterates over all decodable vertices in order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.count).map_while(|i| self.vertex(i))
    }
}

/// Read-only index stream: `triangle_count` triangles, `triangle_stride`
/// bytes apart, each made of three `scalar` indices.
#[derive(Debug, Clone, Copy)]
pub struct IndexStream<'a> {
    pub bytes: &'a [u8],
    pub triangle_count: usize,
    pub triangle_stride: usize,
    pub scalar: ScalarType,
}

impl IndexStream<'_> {
    /// Decodes the three vertex indices of triangle `i`.
    pub fn triangle(&self, i: usize) -> Option<[u32; 3]> {
        if i >= self.triangle_count {
            return None;
        }
        let size = self.scalar.size();
        let start = i.checked_mul(self.triangle_stride)?;
        let end = start.checked_add(3 * size)?;
        let bytes = self.bytes.get(start..end)?;
        let read = |k: usize| -> Option<u32> {
            let field = &bytes[k * size..(k + 1) * size];
            match self.scalar {
                ScalarType::Int16 => Some(bytemuck::pod_read_unaligned::<u16>(field) as u32),
                ScalarType::Int32 => Some(bytemuck::pod_read_unaligned::<u32>(field)),
                ScalarType::Float32 => None,
            }
        };
        Some([read(0)?, read(1)?, read(2)?])
    }

    /// Iterates over all decodable triangles in order.
    pub fn iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.triangle_count).map_while(|i| self.triangle(i))
    }
}

/// Bulk, zero-copy access to an indexed triangle mesh.
///
/// Implementors guarantee that every decoded triangle index is smaller than
/// the vertex stream's `count`, and that the streams stay valid and
/// unchanged for the lifetime of the borrow.
pub trait StridingMesh {
    /// Vertex positions.
    fn vertex_stream(&self) -> VertexStream<'_>;

    /// Triangle indices.
    fn index_stream(&self) -> IndexStream<'_>;

    /// Bounds computed or supplied at construction, if any.
    fn premade_aabb(&self) -> Option<Aabb>;
}

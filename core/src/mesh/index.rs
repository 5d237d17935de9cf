//! Owned index storage with a runtime-selected element width.
//!
//! This module provides:
//! - [`IndexFormat`] - Index element format (u16 or u32)
//! - [`IndexBuffer`] - Owned contiguous indices, tagged by width
//! - [`IndexData`] - Borrowed, typed view of an [`IndexBuffer`]
//! - [`MeshIndex`] - Index element types accepted by mesh construction

/// Largest vertex count addressable by 16-bit indices.
pub const MAX_NARROW_VERTEX_COUNT: usize = u16::MAX as usize;

/// Index format for triangle meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65535 vertices).
    #[default]
    Uint16,
    /// 32-bit unsigned integers (max ~4 billion vertices).
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// An index element type accepted when building a triangle mesh.
///
/// Implemented for `u16` and `u32` only.
pub trait MeshIndex: Copy + bytemuck::Pod + sealed::Sealed {
    /// Format tag of this element type.
    const FORMAT: IndexFormat;

    /// Widens the value to `u32`.
    fn to_u32(self) -> u32;

    /// Copies `indices` into an owned buffer of the same width.
    fn copy_to_buffer(indices: &[Self]) -> IndexBuffer;
}

impl MeshIndex for u16 {
    const FORMAT: IndexFormat = IndexFormat::Uint16;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn copy_to_buffer(indices: &[Self]) -> IndexBuffer {
        IndexBuffer::Narrow(indices.into())
    }
}

impl MeshIndex for u32 {
    const FORMAT: IndexFormat = IndexFormat::Uint32;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    fn copy_to_buffer(indices: &[Self]) -> IndexBuffer {
        IndexBuffer::Wide(indices.into())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Owned, contiguous index storage.
///
/// The width is chosen once at construction; consumers branch on the
/// variant (or call [`IndexBuffer::as_data`]) to get a typed slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndexBuffer {
    /// No indices. Owns no heap storage.
    #[default]
    Empty,
    /// 16-bit indices.
    Narrow(Box<[u16]>),
    /// 32-bit indices.
    Wide(Box<[u32]>),
}

impl IndexBuffer {
    /// Copies `indices` into a 16-bit buffer.
    ///
    /// Every value must already fit in `u16`; callers check the vertex count
    /// (and therefore the index range) before narrowing.
    pub fn narrowed<I: MeshIndex>(indices: &[I]) -> Self {
        debug_assert!(indices.iter().all(|i| i.to_u32() <= u16::MAX as u32));
        Self::Narrow(indices.iter().map(|i| i.to_u32() as u16).collect())
    }

    /// Number of stored indices.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Narrow(indices) => indices.len(),
            Self::Wide(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element format. An empty buffer reports [`IndexFormat::Uint16`].
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::Empty | Self::Narrow(_) => IndexFormat::Uint16,
            Self::Wide(_) => IndexFormat::Uint32,
        }
    }

    /// Borrowed typed view.
    pub fn as_data(&self) -> IndexData<'_> {
        match self {
            Self::Empty => IndexData::Narrow(&[]),
            Self::Narrow(indices) => IndexData::Narrow(indices),
            Self::Wide(indices) => IndexData::Wide(indices),
        }
    }

    /// Raw native-endian bytes of the stored indices.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Narrow(indices) => bytemuck::cast_slice(&indices[..]),
            Self::Wide(indices) => bytemuck::cast_slice(&indices[..]),
        }
    }
}

/// Borrowed view of index storage with its element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexData<'a> {
    Narrow(&'a [u16]),
    Wide(&'a [u32]),
}

impl IndexData<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Narrow(indices) => indices.len(),
            Self::Wide(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn format(&self) -> IndexFormat {
        match self {
            Self::Narrow(_) => IndexFormat::Uint16,
            Self::Wide(_) => IndexFormat::Uint32,
        }
    }
}

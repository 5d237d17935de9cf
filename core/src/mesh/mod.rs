//! Static triangle-mesh collision geometry.
//!
//! This module provides GPU-agnostic, engine-agnostic mesh data structures:
//!
//! - [`IndexedTriangleMesh`] - Immutable owned vertices, 16/32-bit indices and bounds
//! - [`TriangleMeshBuilder`] - Construction options
//! - [`Aabb`] / [`Triangle`] - Geometric helpers
//! - [`StridingMesh`] - Raw stream access for collision back-ends
//!
//! These types are re-exported by `ironwood-physics` for convenience.

mod aabb;
mod error;
mod index;
mod striding;
mod triangle;
mod triangle_mesh;

pub use aabb::Aabb;
pub use error::MeshError;
pub use index::{IndexBuffer, IndexData, IndexFormat, MAX_NARROW_VERTEX_COUNT, MeshIndex};
pub use striding::{IndexStream, ScalarType, StridingMesh, VertexStream};
pub use triangle::Triangle;
pub use triangle_mesh::{IndexedTriangleMesh, TriangleMeshBuilder};

//! Error types for triangle mesh construction.

/// Errors that can occur while building an [`IndexedTriangleMesh`](super::IndexedTriangleMesh).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// An index refers past the end of the vertex array.
    #[error("invalid geometry: index {index} at position {position} exceeds vertex count {vertex_count}")]
    InvalidGeometry {
        /// Position of the offending value in the index array.
        position: usize,
        /// The offending index value.
        index: u32,
        /// Number of vertices supplied.
        vertex_count: usize,
    },
    /// A vertex has a NaN or infinite component.
    #[error("vertex {vertex} has a non-finite component")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        vertex: usize,
    },
}

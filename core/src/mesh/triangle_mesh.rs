//! Static indexed triangle mesh used as collision geometry.
//!
//! This module provides:
//! - [`TriangleMeshBuilder`] - Construction options (precomputed bounds, index narrowing)
//! - [`IndexedTriangleMesh`] - Immutable owned vertices + indices + bounds

use crate::math::{Vec3, vec3_is_finite};
use crate::profile_function;

use super::aabb::Aabb;
use super::error::MeshError;
use super::index::{IndexBuffer, IndexData, IndexFormat, MAX_NARROW_VERTEX_COUNT, MeshIndex};
use super::striding::{IndexStream, ScalarType, StridingMesh, VertexStream};
use super::triangle::Triangle;

/// Options for building an [`IndexedTriangleMesh`].
///
/// # Example
///
/// ```
/// use ironwood_core::math::Vec3;
/// use ironwood_core::mesh::{Aabb, TriangleMeshBuilder};
///
/// let vertices = [Vec3::zeros(), Vec3::x(), Vec3::y()];
/// let mesh = TriangleMeshBuilder::new()
///     .with_precomputed_aabb(Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 0.0)))
///     .with_label("floor")
///     .build(&vertices, &[0u32, 1, 2])
///     .unwrap();
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.index_size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TriangleMeshBuilder {
    precomputed_aabb: Aabb,
    narrow_indices: bool,
    label: Option<String>,
}

impl TriangleMeshBuilder {
    /// Create a builder with no precomputed bounds and narrowing enabled.
    pub fn new() -> Self {
        Self {
            precomputed_aabb: Aabb::EMPTY,
            narrow_indices: true,
            label: None,
        }
    }

    /// Supply precomputed bounds.
    ///
    /// A well-formed box is adopted verbatim, without checking that it
    /// encloses the vertices. An inverted box (max < min on any axis) means
    /// "not supplied" and the bounds are computed from the vertices.
    pub fn with_precomputed_aabb(mut self, aabb: Aabb) -> Self {
        self.precomputed_aabb = aabb;
        self
    }

    /// Allow 32-bit source indices to be stored as 16-bit when the vertex
    /// count permits. Enabled by default.
    pub fn with_index_narrowing(mut self, enabled: bool) -> Self {
        self.narrow_indices = enabled;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build a mesh from deep copies of `vertices` and `indices`.
    ///
    /// Trailing indices that do not form a whole triangle are dropped. When
    /// no whole triangle remains, or either slice is empty, the result is an
    /// empty mesh that owns no storage.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidGeometry`] if a kept index is `>= vertices.len()`.
    /// - [`MeshError::NonFiniteVertex`] if a vertex has a NaN or infinite component.
    pub fn build<I: MeshIndex>(
        &self,
        vertices: &[Vec3],
        indices: &[I],
    ) -> Result<IndexedTriangleMesh, MeshError> {
        profile_function!();

        let triangle_count = indices.len() / 3;
        let index_count = triangle_count * 3;
        if index_count != indices.len() {
            log::warn!(
                "triangle mesh '{}': dropping {} trailing index(es) of an incomplete triangle",
                display_name(self.label.as_deref()),
                indices.len() - index_count
            );
        }

        if triangle_count == 0 || vertices.is_empty() {
            log::debug!(
                "triangle mesh '{}': no triangles, building empty mesh",
                display_name(self.label.as_deref())
            );
            return Ok(IndexedTriangleMesh {
                aabb: self.adopted_aabb().unwrap_or(Aabb::EMPTY),
                label: self.label.clone(),
                ..IndexedTriangleMesh::empty()
            });
        }

        let indices = &indices[..index_count];
        validate(vertices, indices)?;

        let narrow = I::FORMAT == IndexFormat::Uint32
            && self.narrow_indices
            && vertices.len() <= MAX_NARROW_VERTEX_COUNT;
        let index_buffer = if narrow {
            IndexBuffer::narrowed(indices)
        } else {
            I::copy_to_buffer(indices)
        };

        let aabb = match self.adopted_aabb() {
            Some(aabb) => aabb,
            None => {
                crate::profile_scope!("triangle_mesh: brute force aabb");
                Aabb::from_points(vertices)
            }
        };

        log::debug!(
            "triangle mesh '{}': {} vertices, {} triangles, {}-byte indices{}, {} bounds",
            display_name(self.label.as_deref()),
            vertices.len(),
            triangle_count,
            index_buffer.format().size(),
            if narrow { " (narrowed)" } else { "" },
            if self.precomputed_aabb.is_valid() {
                "precomputed"
            } else {
                "computed"
            },
        );

        Ok(IndexedTriangleMesh {
            vertices: vertices.into(),
            indices: index_buffer,
            aabb,
            label: self.label.clone(),
        })
    }

    fn adopted_aabb(&self) -> Option<Aabb> {
        self.precomputed_aabb
            .is_valid()
            .then_some(self.precomputed_aabb)
    }
}

impl Default for TriangleMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(label: Option<&str>) -> &str {
    label.unwrap_or("<unnamed>")
}

fn validate<I: MeshIndex>(vertices: &[Vec3], indices: &[I]) -> Result<(), MeshError> {
    let vertex_count = vertices.len();
    if let Some((position, index)) = indices
        .iter()
        .map(|i| i.to_u32())
        .enumerate()
        .find(|&(_, index)| index as usize >= vertex_count)
    {
        return Err(MeshError::InvalidGeometry {
            position,
            index,
            vertex_count,
        });
    }
    if let Some(vertex) = vertices.iter().position(|v| !vec3_is_finite(v)) {
        return Err(MeshError::NonFiniteVertex { vertex });
    }
    Ok(())
}

/// An immutable triangle mesh owning its vertex and index storage.
///
/// Every stored index is smaller than [`vertex_count`](Self::vertex_count),
/// the index count is a multiple of three, and the index width is 16-bit
/// whenever 32-bit source indices could be narrowed. Nothing changes after
/// construction, so the mesh can be shared across threads and queried
/// concurrently.
///
/// Queries come in two forms: bulk views ([`vertex_data`](Self::vertex_data),
/// [`index_data`](Self::index_data), and the [`StridingMesh`] streams) for
/// tight loops, and per-element accessors for incidental lookups.
#[derive(Debug, Clone, Default)]
pub struct IndexedTriangleMesh {
    vertices: Box<[Vec3]>,
    indices: IndexBuffer,
    aabb: Aabb,
    label: Option<String>,
}

impl IndexedTriangleMesh {
    /// Build a mesh with default options. See [`TriangleMeshBuilder::build`].
    pub fn new<I: MeshIndex>(vertices: &[Vec3], indices: &[I]) -> Result<Self, MeshError> {
        TriangleMeshBuilder::new().build(vertices, indices)
    }

    /// Start configuring a mesh.
    pub fn builder() -> TriangleMeshBuilder {
        TriangleMeshBuilder::new()
    }

    /// An empty mesh with no triangles and invalid bounds.
    pub fn empty() -> Self {
        Self {
            vertices: Box::default(),
            indices: IndexBuffer::Empty,
            aabb: Aabb::EMPTY,
            label: None,
        }
    }

    /// Whether the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Size in bytes of one stored index (2 or 4).
    pub fn index_size(&self) -> usize {
        self.indices.format().size()
    }

    pub fn index_format(&self) -> IndexFormat {
        self.indices.format()
    }

    /// Bounds supplied at construction, or computed from the vertices.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label for log output: the debug label, or `<unnamed>`.
    pub fn display_name(&self) -> &str {
        display_name(self.label.as_deref())
    }

    /// Contiguous vertex positions.
    #[inline]
    pub fn vertex_data(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Contiguous indices, typed by the stored width.
    #[inline]
    pub fn index_data(&self) -> IndexData<'_> {
        self.indices.as_data()
    }

    /// Vertex `index` by value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= vertex_count()`.
    #[inline]
    pub fn vertex_at(&self, index: usize) -> Vec3 {
        match self.get_vertex(index) {
            Some(v) => v,
            None => panic!(
                "vertex index {index} out of range (vertex count {})",
                self.vertices.len()
            ),
        }
    }

    #[inline]
    pub fn get_vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// Vertex indices of triangle `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= triangle_count()`.
    pub fn triangle_indices(&self, index: usize) -> [u32; 3] {
        match self.get_triangle_indices(index) {
            Some(tri) => tri,
            None => panic!(
                "triangle index {index} out of range (triangle count {})",
                self.triangle_count()
            ),
        }
    }

    pub fn get_triangle_indices(&self, index: usize) -> Option<[u32; 3]> {
        let base = index.checked_mul(3)?;
        let range = base..base.checked_add(3)?;
        match &self.indices {
            IndexBuffer::Empty => None,
            IndexBuffer::Narrow(indices) => indices
                .get(range)
                .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32]),
            IndexBuffer::Wide(indices) => indices.get(range).map(|t| [t[0], t[1], t[2]]),
        }
    }

    /// Triangle `index` resolved into positions.
    ///
    /// # Panics
    ///
    /// Panics if `index >= triangle_count()`.
    #[inline]
    pub fn triangle_at(&self, index: usize) -> Triangle {
        self.resolve(self.triangle_indices(index))
    }

    pub fn get_triangle(&self, index: usize) -> Option<Triangle> {
        self.get_triangle_indices(index).map(|t| self.resolve(t))
    }

    /// All triangles in index order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(|i| self.triangle_at(i))
    }

    /// Triangles whose bounds overlap `aabb`, with their triangle index.
    pub fn triangles_in_aabb(&self, aabb: &Aabb) -> impl Iterator<Item = (usize, Triangle)> + '_ {
        let query = *aabb;
        let skip_all = !query.is_valid() || !query.intersects(&self.aabb);
        self.triangles()
            .enumerate()
            .filter(move |(_, tri)| !skip_all && tri.aabb().intersects(&query))
    }

    /// Number of triangles with area below `epsilon`.
    pub fn degenerate_triangle_count(&self, epsilon: f32) -> usize {
        self.triangles()
            .filter(|tri| tri.is_degenerate(epsilon))
            .count()
    }

    #[inline]
    fn resolve(&self, [a, b, c]: [u32; 3]) -> Triangle {
        // Indices were validated against the vertex count at construction.
        Triangle::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        )
    }
}

impl StridingMesh for IndexedTriangleMesh {
    fn vertex_stream(&self) -> VertexStream<'_> {
        VertexStream {
            bytes: bytemuck::cast_slice(&self.vertices[..]),
            count: self.vertices.len(),
            stride: std::mem::size_of::<Vec3>(),
            scalar: ScalarType::Float32,
        }
    }

    fn index_stream(&self) -> IndexStream<'_> {
        let format = self.indices.format();
        IndexStream {
            bytes: self.indices.as_bytes(),
            triangle_count: self.triangle_count(),
            triangle_stride: 3 * format.size(),
            scalar: format.into(),
        }
    }

    fn premade_aabb(&self) -> Option<Aabb> {
        self.aabb.is_valid().then_some(self.aabb)
    }
}

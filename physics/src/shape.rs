//! Static triangle-mesh collision shape.
//!
//! [`StaticTriangleMeshShape`] owns an [`IndexedTriangleMesh`] and the rapier
//! shape built from it. It is meant for fixed, concave level geometry:
//! terrain, floors, walls.

use std::sync::Arc;

use ironwood_core::math::Vec3;
use ironwood_core::mesh::{Aabb, IndexedTriangleMesh, MeshError, MeshIndex, Triangle};

use crate::conversions::trimesh_from_striding;
use crate::rapier3d::parry::shape::ShapeType;
use crate::rapier3d::prelude::*;

/// Errors that can occur while creating a collision shape.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The source geometry was rejected by mesh construction.
    #[error(transparent)]
    Mesh(#[from] MeshError),
    /// The mesh has no triangles; rapier cannot build an empty trimesh.
    #[error("triangle mesh has no triangles")]
    EmptyMesh,
    /// The physics backend rejected the geometry.
    #[error("collision backend rejected the mesh: {0}")]
    Backend(String),
}

/// A triangle reported by [`StaticTriangleMeshShape::enumerate_triangles_inside_aabb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTriangle {
    pub positions: [Vec3; 3],
    /// Sub-part the triangle belongs to. Always 0: meshes have one part.
    pub part_id: usize,
    pub triangle_index: usize,
}

/// Concave collision shape over an immutable indexed triangle mesh.
///
/// The mesh is held in an [`Arc`] so several shapes (and threads) can share
/// it; the rapier [`SharedShape`] is reference counted as well, so cloning a
/// shape or building many colliders from it copies no geometry.
///
/// # Example
///
/// ```ignore
/// let shape = StaticTriangleMeshShape::from_u32(&vertices, &indices, None)?;
/// let ground = physics.add_body(RigidBodyBuilder::fixed().build());
/// physics.add_collider(shape.collider().friction(0.8).build(), ground);
/// ```
#[derive(Clone)]
pub struct StaticTriangleMeshShape {
    mesh: Arc<IndexedTriangleMesh>,
    shape: SharedShape,
}

impl StaticTriangleMeshShape {
    /// Wraps an already built mesh.
    pub fn new(mesh: IndexedTriangleMesh) -> Result<Self, ShapeError> {
        Self::from_arc(Arc::new(mesh))
    }

    /// Wraps a shared mesh.
    pub fn from_arc(mesh: Arc<IndexedTriangleMesh>) -> Result<Self, ShapeError> {
        ironwood_core::profile_scope!("physics: static trimesh shape");

        let shape = trimesh_from_striding(mesh.as_ref())?;
        log::debug!(
            "static trimesh shape '{}': {} triangles, {}-byte indices",
            mesh.display_name(),
            mesh.triangle_count(),
            mesh.index_size()
        );
        Ok(Self { mesh, shape })
    }

    /// Builds the mesh from 32-bit indices and wraps it.
    ///
    /// `precomputed_aabb` is adopted verbatim when well-formed; `None` (or
    /// an inverted box) means the bounds are computed from the vertices.
    pub fn from_u32(
        vertices: &[Vec3],
        indices: &[u32],
        precomputed_aabb: Option<Aabb>,
    ) -> Result<Self, ShapeError> {
        Self::build(vertices, indices, precomputed_aabb)
    }

    /// Builds the mesh from 16-bit indices and wraps it.
    pub fn from_u16(
        vertices: &[Vec3],
        indices: &[u16],
        precomputed_aabb: Option<Aabb>,
    ) -> Result<Self, ShapeError> {
        Self::build(vertices, indices, precomputed_aabb)
    }

    fn build<I: MeshIndex>(
        vertices: &[Vec3],
        indices: &[I],
        precomputed_aabb: Option<Aabb>,
    ) -> Result<Self, ShapeError> {
        let mesh = IndexedTriangleMesh::builder()
            .with_precomputed_aabb(precomputed_aabb.unwrap_or(Aabb::EMPTY))
            .build(vertices, indices)?;
        Self::new(mesh)
    }

    /// The underlying mesh.
    pub fn mesh(&self) -> &Arc<IndexedTriangleMesh> {
        &self.mesh
    }

    /// The rapier shape built from the mesh.
    pub fn shape(&self) -> &SharedShape {
        &self.shape
    }

    /// Backend shape type. Always [`ShapeType::TriMesh`].
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// A collider builder over this shape, to be finished by the caller.
    pub fn collider(&self) -> ColliderBuilder {
        ColliderBuilder::new(self.shape.clone())
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn index_count(&self) -> usize {
        self.mesh.index_count()
    }

    /// Size in bytes of one stored index (2 or 4).
    pub fn index_size(&self) -> usize {
        self.mesh.index_size()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// See [`IndexedTriangleMesh::vertex_at`].
    pub fn vertex_at(&self, index: usize) -> Vec3 {
        self.mesh.vertex_at(index)
    }

    /// See [`IndexedTriangleMesh::triangle_at`].
    pub fn triangle_at(&self, index: usize) -> Triangle {
        self.mesh.triangle_at(index)
    }

    /// Mesh bounds in local space.
    pub fn aabb(&self) -> Aabb {
        self.mesh.aabb()
    }

    /// Calls `f` for every triangle whose bounds overlap `aabb`.
    pub fn enumerate_triangles_inside_aabb(&self, aabb: &Aabb, mut f: impl FnMut(&ShapeTriangle)) {
        for (triangle_index, triangle) in self.mesh.triangles_in_aabb(aabb) {
            f(&ShapeTriangle {
                positions: triangle.positions,
                part_id: 0,
                triangle_index,
            });
        }
    }
}

impl std::fmt::Debug for StaticTriangleMeshShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTriangleMeshShape")
            .field("label", &self.mesh.label())
            .field("vertex_count", &self.mesh.vertex_count())
            .field("triangle_count", &self.mesh.triangle_count())
            .field("index_size", &self.mesh.index_size())
            .field("aabb", &self.mesh.aabb())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> (Vec<Vec3>, Vec<u32>) {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 2.0),
        ];
        (vertices, vec![0, 1, 2, 1, 3, 2])
    }

    #[test]
    fn accessors_delegate_to_mesh() {
        let (vertices, indices) = ramp();
        let shape = StaticTriangleMeshShape::from_u32(&vertices, &indices, None).unwrap();

        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.index_count(), 6);
        assert_eq!(shape.triangle_count(), 2);
        assert_eq!(shape.index_size(), 2);
        assert_eq!(shape.vertex_at(3), vertices[3]);
        assert_eq!(
            shape.triangle_at(1).positions,
            [vertices[1], vertices[3], vertices[2]]
        );
        assert_eq!(shape.aabb().max, Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(shape.shape_type(), ShapeType::TriMesh);
    }

    #[test]
    fn precomputed_bounds_pass_through() {
        let (vertices, indices) = ramp();
        let narrow: Vec<u16> = indices.iter().map(|&i| i as u16).collect();
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(3.0, 3.0, 3.0));
        let shape = StaticTriangleMeshShape::from_u16(&vertices, &narrow, Some(aabb)).unwrap();
        assert_eq!(shape.aabb(), aabb);
    }

    #[test]
    fn invalid_geometry_is_reported() {
        let (vertices, mut indices) = ramp();
        indices[5] = 7;
        let err = StaticTriangleMeshShape::from_u32(&vertices, &indices, None).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Mesh(MeshError::InvalidGeometry { index: 7, .. })
        ));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let err = StaticTriangleMeshShape::from_u32(&[], &[], None).unwrap_err();
        assert!(matches!(err, ShapeError::EmptyMesh));
        assert_eq!(err.to_string(), "triangle mesh has no triangles");
    }

    #[test]
    fn enumerate_reports_overlapping_triangles() {
        let (vertices, indices) = ramp();
        let shape = StaticTriangleMeshShape::from_u32(&vertices, &indices, None).unwrap();

        let mut seen = Vec::new();
        let query = Aabb::new(Vec3::new(-0.5, -0.5, -0.5), Vec3::new(2.5, 1.5, 2.5));
        shape.enumerate_triangles_inside_aabb(&query, |tri| {
            assert_eq!(tri.part_id, 0);
            assert_eq!(tri.positions, shape.triangle_at(tri.triangle_index).positions);
            seen.push(tri.triangle_index);
        });
        assert_eq!(seen, vec![0, 1]);

        let mut count = 0;
        let outside = Aabb::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(6.0, 6.0, 6.0));
        shape.enumerate_triangles_inside_aabb(&outside, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn clones_share_geometry() {
        let (vertices, indices) = ramp();
        let shape = StaticTriangleMeshShape::from_u32(&vertices, &indices, None).unwrap();
        let copy = shape.clone();
        assert!(Arc::ptr_eq(shape.mesh(), copy.mesh()));
    }
}

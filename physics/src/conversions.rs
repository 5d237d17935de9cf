//! Conversion helpers between f32 mesh types and physics-precision types.
//!
//! Also includes the adapter that materializes any [`StridingMesh`] into a
//! rapier triangle-mesh shape.

use ironwood_core::math::{Real, Vec3};
use ironwood_core::mesh::StridingMesh;

use crate::rapier3d::prelude::*;
use crate::shape::ShapeError;

/// Converts a mesh `Vec3` (f32) to a physics `Vector` of precision `Real`.
pub fn vec3_to_vector(v: &Vec3) -> Vector {
    Vector::new(v.x as Real, v.y as Real, v.z as Real)
}

/// Converts a physics `Vector` to a mesh `Vec3` (f32).
pub fn vector_to_vec3(v: &Vector) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Builds a rapier triangle-mesh shape from the mesh's raw streams.
///
/// The streams are decoded once, widened to `Real`, and handed to rapier,
/// which builds its own acceleration structure over them.
///
/// # Errors
///
/// - [`ShapeError::EmptyMesh`] if the index stream has no triangles.
/// - [`ShapeError::Backend`] if a stream cannot be fully decoded or rapier
///   rejects the geometry.
pub fn trimesh_from_striding<M: StridingMesh + ?Sized>(mesh: &M) -> Result<SharedShape, ShapeError> {
    ironwood_core::profile_function!();

    let vertex_stream = mesh.vertex_stream();
    let index_stream = mesh.index_stream();
    if index_stream.triangle_count == 0 {
        return Err(ShapeError::EmptyMesh);
    }

    let vertices: Vec<Vector> = vertex_stream.iter().map(|v| vec3_to_vector(&v)).collect();
    if vertices.len() != vertex_stream.count {
        return Err(ShapeError::Backend(format!(
            "vertex stream decoded {} of {} vertices",
            vertices.len(),
            vertex_stream.count
        )));
    }

    let indices: Vec<[u32; 3]> = index_stream.iter().collect();
    if indices.len() != index_stream.triangle_count {
        return Err(ShapeError::Backend(format!(
            "index stream decoded {} of {} triangles",
            indices.len(),
            index_stream.triangle_count
        )));
    }

    SharedShape::trimesh(vertices, indices).map_err(|e| ShapeError::Backend(format!("{e:?}")))
}

//! Math type aliases and helper functions.
//!
//! Mesh geometry is always stored in `f32`. Precision-aware physics types
//! live behind the `physics-math` feature so the collision back-end can pick
//! `f64` (default) or `f32` (`physics-f32`).

pub use nalgebra;

// ===== Geometry math (always f32) =====

/// 3D vector (f32). Mesh vertex positions use this type.
pub type Vec3 = nalgebra::Vector3<f32>;

// ===== Helper functions =====

/// Create a vector from an `[x, y, z]` array.
#[inline]
pub fn vec3_from_array(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

/// Componentwise minimum of two vectors.
#[inline]
pub fn vec3_min(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Componentwise maximum of two vectors.
#[inline]
pub fn vec3_max(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Whether every component of the vector is finite.
#[inline]
pub fn vec3_is_finite(v: &Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

// ===== Physics math (precision-aware) =====

/// Physics scalar type. `f64` by default, `f32` with `physics-f32` feature.
#[cfg(all(feature = "physics-math", not(feature = "physics-f32")))]
pub type Real = f64;

/// Physics scalar type. `f32` with `physics-f32` feature.
#[cfg(all(feature = "physics-math", feature = "physics-f32"))]
pub type Real = f32;

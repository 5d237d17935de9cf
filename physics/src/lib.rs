//! # Ironwood Physics
//!
//! Collision shapes backed by [rapier](https://rapier.rs/).
//!
//! The mesh types in [`ironwood_core::mesh`] know nothing about rapier; this
//! crate is the integration boundary. It reads meshes through the
//! [`StridingMesh`](ironwood_core::mesh::StridingMesh) capability and turns
//! them into rapier shapes and colliders.
//!
//! ## Features
//!
//! - `physics-3d`: 3D physics with `f64` precision (default)
//! - `physics-3d-f32`: 3D physics with `f32` precision
//! - `profiling`: Tracy spans around shape creation and stepping

pub use ironwood_core::mesh;

#[cfg(any(feature = "physics-3d", feature = "physics-3d-f32"))]
pub mod conversions;

#[cfg(any(feature = "physics-3d", feature = "physics-3d-f32"))]
pub mod shape;

#[cfg(any(feature = "physics-3d", feature = "physics-3d-f32"))]
pub mod world;

#[cfg(any(feature = "physics-3d", feature = "physics-3d-f32"))]
pub use shape::{ShapeError, ShapeTriangle, StaticTriangleMeshShape};

#[cfg(any(feature = "physics-3d", feature = "physics-3d-f32"))]
pub use world::PhysicsWorld3D;

// Re-export the active rapier crate under a unified name.

#[cfg(all(feature = "physics-3d", not(feature = "physics-3d-f32")))]
pub use rapier3d_f64 as rapier3d;

#[cfg(feature = "physics-3d-f32")]
pub use ::rapier3d;

//! # Trimesh Demo
//!
//! Builds a wavy heightfield terrain as an indexed triangle mesh, turns it
//! into a static collision shape, and drops a handful of balls onto it.
//!
//! Run with `RUST_LOG=debug` to see mesh construction details.

use ironwood_core::math::Vec3;
use ironwood_core::mesh::{Aabb, IndexedTriangleMesh};
use ironwood_physics::conversions::vector_to_vec3;
use ironwood_physics::rapier3d::prelude::*;
use ironwood_physics::{PhysicsWorld3D, ShapeError, StaticTriangleMeshShape};

const GRID: u32 = 40;
const SPACING: f32 = 0.5;
const STEPS: usize = 300;

fn terrain_height(x: f32, z: f32) -> f32 {
    (x * 0.3).sin() + (z * 0.3).cos()
}

/// `(GRID + 1)^2` vertices, two triangles per cell.
fn terrain() -> Result<IndexedTriangleMesh, ShapeError> {
    let stride = GRID + 1;
    let half_extent = GRID as f32 * SPACING / 2.0;

    let mut vertices = Vec::with_capacity((stride * stride) as usize);
    for i in 0..stride {
        for j in 0..stride {
            let x = i as f32 * SPACING - half_extent;
            let z = j as f32 * SPACING - half_extent;
            vertices.push(Vec3::new(x, terrain_height(x, z), z));
        }
    }

    let mut indices = Vec::with_capacity((GRID * GRID * 6) as usize);
    for i in 0..GRID {
        for j in 0..GRID {
            let v0 = i * stride + j;
            let v1 = v0 + 1;
            let v2 = v0 + stride;
            let v3 = v2 + 1;
            indices.extend([v0, v1, v2, v1, v3, v2]);
        }
    }

    let mesh = IndexedTriangleMesh::builder()
        .with_label("terrain")
        .build(&vertices, &indices)?;
    Ok(mesh)
}

fn run() -> Result<(), ShapeError> {
    let shape = StaticTriangleMeshShape::new(terrain()?)?;
    let aabb = shape.aabb();
    log::info!(
        "terrain: {} vertices, {} triangles, {}-byte indices, bounds {:?}..{:?}",
        shape.vertex_count(),
        shape.triangle_count(),
        shape.index_size(),
        aabb.min.as_slice(),
        aabb.max.as_slice()
    );

    let mut physics = PhysicsWorld3D::default();
    physics.add_static_mesh(&shape);

    let mut balls = Vec::new();
    for k in 0..5 {
        let x = k as f32 * 2.0 - 4.0;
        let z = 1.5 - k as f32 * 0.7;
        let ball = physics.add_body(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(x.into(), 6.0, z.into()))
                .build(),
        );
        physics.add_collider(ColliderBuilder::ball(0.4).restitution(0.2).build(), ball);
        balls.push((ball, x, z));
    }

    for step in 0..STEPS {
        physics.step();
        ironwood_core::frame_mark!();
        if step % 60 == 0 {
            let (ball, ..) = balls[0];
            let t = physics.bodies[ball].position().translation;
            log::info!("step {step}: ball 0 at y = {:.3}", t.y);
        }
    }

    for (k, &(ball, x, z)) in balls.iter().enumerate() {
        let center = vector_to_vec3(&physics.bodies[ball].position().translation);
        let ground = terrain_height(x, z);
        log::info!(
            "ball {k}: rest height {:.3} (terrain below {:.3})",
            center.y,
            ground
        );

        let probe = Aabb::new(
            center - Vec3::new(0.5, 1.0, 0.5),
            center + Vec3::new(0.5, 0.0, 0.5),
        );
        let mut touching = 0;
        shape.enumerate_triangles_inside_aabb(&probe, |_| touching += 1);
        log::info!("ball {k}: {touching} terrain triangles under it");
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    ironwood_core::init();

    if let Err(e) = run() {
        log::error!("trimesh demo failed: {e}");
        std::process::exit(1);
    }
}

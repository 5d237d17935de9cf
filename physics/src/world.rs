//! Minimal rapier 3D world used to drive static mesh shapes.
//!
//! Uses rapier3d (f64 by default, f32 with `physics-3d-f32` feature).

use crate::rapier3d::prelude::*;
use crate::shape::StaticTriangleMeshShape;

/// All rapier 3D simulation state in one place.
///
/// # Example
///
/// ```ignore
/// let mut physics = PhysicsWorld3D::default();
/// let (ground, _) = physics.add_static_mesh(&terrain);
/// physics.step();
/// ```
pub struct PhysicsWorld3D {
    pub gravity: Vector,
    pub integration_parameters: IntegrationParameters,
    pub pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsWorld3D {
    fn default() -> Self {
        Self {
            gravity: Vector::new(0.0, -9.81, 0.0),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsWorld3D {
    /// Steps the simulation by one timestep.
    pub fn step(&mut self) {
        ironwood_core::profile_scope!("rapier3d: step");
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Adds a rigid body and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    /// Adds a collider attached to a rigid body and returns its handle.
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    /// Inserts `shape` as level geometry on a new fixed body at the origin.
    pub fn add_static_mesh(
        &mut self,
        shape: &StaticTriangleMeshShape,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = self.add_body(RigidBodyBuilder::fixed().build());
        let collider = self.add_collider(shape.collider().build(), body);
        log::debug!(
            "static mesh '{}' added with {} triangles",
            shape.mesh().display_name(),
            shape.triangle_count()
        );
        (body, collider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ironwood_core::math::Vec3;

    #[test]
    fn physics_world_default() {
        let world = PhysicsWorld3D::default();
        assert_relative_eq!(world.gravity.y, -9.81);
        assert_eq!(world.bodies.len(), 0);
        assert_eq!(world.colliders.len(), 0);
    }

    #[test]
    fn step_moves_dynamic_body() {
        let mut physics = PhysicsWorld3D::default();

        let body_handle = physics.add_body(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(0.0, 10.0, 0.0))
                .build(),
        );
        physics.add_collider(ColliderBuilder::ball(0.5).build(), body_handle);

        let initial_y = physics.bodies[body_handle].position().translation.y;
        for _ in 0..10 {
            physics.step();
        }
        let final_y = physics.bodies[body_handle].position().translation.y;
        assert!(final_y < initial_y);
    }

    #[test]
    fn static_mesh_goes_on_a_fixed_body() {
        let vertices = [
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let shape =
            StaticTriangleMeshShape::from_u32(&vertices, &[0, 1, 2, 1, 3, 2], None).unwrap();

        let mut physics = PhysicsWorld3D::default();
        let (body, collider) = physics.add_static_mesh(&shape);

        assert!(physics.bodies[body].is_fixed());
        assert_eq!(physics.colliders[collider].parent(), Some(body));
        let trimesh = physics.colliders[collider].shape().as_trimesh().unwrap();
        assert_eq!(trimesh.indices().len(), shape.triangle_count());
    }
}

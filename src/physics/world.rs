//! Physics simulation using rapier3d

use glam::{Quat, Vec3};
use nalgebra::UnitQuaternion;
use rapier3d::prelude::*;
use smallvec::SmallVec;

use super::contact::{ContactPair, ContactPoint};

/// Handle to a rigid body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigidBodyHandle(pub rapier3d::dynamics::RigidBodyHandle);

/// Handle to a collider in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle(pub rapier3d::geometry::ColliderHandle);

/// Convert glam Quat to rapier3d UnitQuaternion
fn quat_to_rapier(q: Quat) -> UnitQuaternion<f32> {
    UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
}

/// Physics world manager
pub struct Physics {
    /// Gravity vector
    pub gravity: Vec3,
    /// Physics pipeline
    pipeline: PhysicsPipeline,
    /// Island manager
    island_manager: IslandManager,
    /// Broad phase
    broad_phase: DefaultBroadPhase,
    /// Narrow phase
    narrow_phase: NarrowPhase,
    /// Rigid body set
    rigid_body_set: RigidBodySet,
    /// Collider set
    collider_set: ColliderSet,
    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,
    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,
    /// CCD solver
    ccd_solver: CCDSolver,
    /// Integration parameters
    integration_parameters: IntegrationParameters,
}

impl Physics {
    /// Create a new physics world with default gravity
    pub fn new() -> Self {
        Self::with_gravity(Vec3::new(0.0, -9.81, 0.0))
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            integration_parameters: IntegrationParameters::default(),
        }
    }

    /// Step the physics simulation
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.pipeline.step(
            &vector![self.gravity.x, self.gravity.y, self.gravity.z],
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Create a static rigid body (doesn't move)
    pub fn create_static_body(&mut self, position: Vec3, rotation: Quat) -> RigidBodyHandle {
        let isometry = Isometry::from_parts(
            nalgebra::Translation3::new(position.x, position.y, position.z),
            quat_to_rapier(rotation),
        );
        let body = RigidBodyBuilder::fixed().position(isometry).build();

        RigidBodyHandle(self.rigid_body_set.insert(body))
    }

    /// Create a dynamic rigid body (affected by forces)
    pub fn create_dynamic_body(&mut self, position: Vec3, rotation: Quat) -> RigidBodyHandle {
        let isometry = Isometry::from_parts(
            nalgebra::Translation3::new(position.x, position.y, position.z),
            quat_to_rapier(rotation),
        );
        let body = RigidBodyBuilder::dynamic().position(isometry).build();

        RigidBodyHandle(self.rigid_body_set.insert(body))
    }

    /// Add a sphere collider to a rigid body
    pub fn add_sphere_collider(
        &mut self,
        body: RigidBodyHandle,
        radius: f32,
        density: f32,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::ball(radius).density(density).build();

        ColliderHandle(self.collider_set.insert_with_parent(
            collider,
            body.0,
            &mut self.rigid_body_set,
        ))
    }

    /// Add a ground plane collider
    pub fn add_ground_plane(&mut self, body: RigidBodyHandle) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(100.0, 0.1, 100.0).build();

        ColliderHandle(self.collider_set.insert_with_parent(
            collider,
            body.0,
            &mut self.rigid_body_set,
        ))
    }

    /// Get the position of a rigid body
    pub fn get_position(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(body.0).map(|rb| {
            let pos = rb.translation();
            Vec3::new(pos.x, pos.y, pos.z)
        })
    }

    /// Apply an impulse to a dynamic body
    pub fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vec3) {
        if let Some(rb) = self.rigid_body_set.get_mut(body.0) {
            rb.apply_impulse(vector![impulse.x, impulse.y, impulse.z], true);
        }
    }

    /// Set the linear velocity of a body
    pub fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3) {
        if let Some(rb) = self.rigid_body_set.get_mut(body.0) {
            rb.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    /// Get the linear velocity of a body
    pub fn get_linear_velocity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(body.0).map(|rb| {
            let vel = rb.linvel();
            Vec3::new(vel.x, vel.y, vel.z)
        })
    }

    /// Collect the current contact pairs involving the given collider.
    ///
    /// Normals are returned in world space, oriented to push the queried
    /// collider away from the other one. The returned data is a snapshot
    /// of the last completed step and goes stale on the next `step` call.
    pub fn contact_pairs(&self, collider: ColliderHandle) -> Vec<ContactPair> {
        let mut pairs = Vec::new();

        for pair in self.narrow_phase.contact_pairs_with(collider.0) {
            let queried_is_first = pair.collider1 == collider.0;
            let other = if queried_is_first {
                pair.collider2
            } else {
                pair.collider1
            };

            let mut points: SmallVec<[ContactPoint; 4]> = SmallVec::new();
            for manifold in &pair.manifolds {
                let n = manifold.data.normal;
                // Rapier's manifold normal points from the first collider
                // towards the second.
                let normal = if queried_is_first {
                    -Vec3::new(n.x, n.y, n.z)
                } else {
                    Vec3::new(n.x, n.y, n.z)
                };

                for point in &manifold.points {
                    points.push(ContactPoint {
                        normal_impulse: point.data.impulse,
                        normal,
                    });
                }
            }

            if !points.is_empty() {
                pairs.push(ContactPair {
                    other: ColliderHandle(other),
                    points,
                });
            }
        }

        pairs
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new()
    }
}

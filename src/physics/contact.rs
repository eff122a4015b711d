//! Frame-scoped contact data for collision response

use glam::Vec3;
use smallvec::SmallVec;

use super::world::ColliderHandle;

/// A single resolved contact point.
///
/// The normal is in world space, oriented to push the queried collider
/// away from its counterpart.
#[derive(Debug, Clone, Copy)]
pub struct ContactPoint {
    /// Impulse magnitude applied along the contact normal by the solver
    pub normal_impulse: f32,
    /// World-space contact normal
    pub normal: Vec3,
}

/// All contact points between the queried collider and one other collider
/// for the current simulation step.
///
/// Valid for one frame only; the physics world rebuilds contact data on
/// every step.
#[derive(Debug, Clone)]
pub struct ContactPair {
    /// The other collider in the pair
    pub other: ColliderHandle,
    /// Resolved contact points for this pair
    pub points: SmallVec<[ContactPoint; 4]>,
}

impl ContactPair {
    /// Create an empty pair against the given collider
    #[must_use]
    pub fn new(other: ColliderHandle) -> Self {
        Self {
            other,
            points: SmallVec::new(),
        }
    }

    /// Check if the pair carries no contact points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Physics simulation module
//!
//! Built on top of rapier3d

mod contact;
mod world;

pub use contact::{ContactPair, ContactPoint};
pub use world::{ColliderHandle, Physics, RigidBodyHandle};

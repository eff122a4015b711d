//! Physics-driven audio behaviors for rigid bodies
//!
//! This crate provides:
//! - Contact-reactive audio (rolling and impact sounds) driven by rigid-body contacts
//! - Physics simulation with rapier3d
//! - Audio playback with rodio

pub mod audio;
pub mod behavior;
pub mod physics;

// Re-exports for convenience
pub use glam;
pub use rapier3d;
pub use rodio;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::audio::{
        AudioClip, AudioEmitter, AudioError, AudioOutput, AudioSource, PlaybackState,
    };
    pub use crate::behavior::{ContactAudioParams, ContactReactiveAudio};
    pub use crate::physics::{ColliderHandle, ContactPair, ContactPoint, Physics, RigidBodyHandle};
    pub use glam::{Quat, Vec3};
}

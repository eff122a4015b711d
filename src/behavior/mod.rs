//! Gameplay behaviors driven by physics state

mod contact_audio;
mod params;

pub use contact_audio::ContactReactiveAudio;
pub use params::{ContactAudioParams, ParamsError};

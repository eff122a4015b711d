//! Audio clips, sources, and output
//!
//! Built on top of the rodio audio library.
//! Supports WAV, MP3, OGG, and FLAC formats.

mod clip;
mod output;
mod source;

pub use clip::AudioClip;
pub use output::AudioOutput;
pub use source::{AudioEmitter, AudioError, AudioSource, PlaybackState};

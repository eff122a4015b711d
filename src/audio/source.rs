//! Audio sources for playing individual sounds

use std::io::Cursor;

use rodio::{Decoder, Sink, Source, mixer::Mixer};

use super::clip::AudioClip;

/// Playback state of an audio source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Audio is playing
    Playing,
    /// Audio has stopped
    #[default]
    Stopped,
}

/// Command surface of an audio emitter.
///
/// This is the seam between gameplay behaviors and the audio backend:
/// behaviors drive gain and play/stop state and nothing else. Gain is not
/// clamped above 1.0 here; saturation is the mixer's responsibility.
pub trait AudioEmitter {
    /// Get the current gain
    fn gain(&self) -> f32;
    /// Set the gain (0.0 = silent, 1.0 = normal, >1.0 = amplified)
    fn set_gain(&mut self, gain: f32);
    /// Start or resume playback
    fn play(&mut self);
    /// Stop playback
    fn stop(&mut self);
}

/// An audio source that plays a single clip
pub struct AudioSource {
    /// The audio sink for playback control
    sink: Sink,
    /// The clip this source plays, kept for requeueing after a stop
    clip: AudioClip,
    /// Whether this source loops
    looping: bool,
    /// Current playback state
    state: PlaybackState,
}

impl AudioSource {
    /// Create a new audio source playing the given clip
    ///
    /// The clip is decoded once up front, so a clip that reaches the
    /// source is known to be playable.
    ///
    /// # Errors
    ///
    /// Returns an error if the clip cannot be decoded
    pub fn from_clip(mixer: &Mixer, clip: &AudioClip, looping: bool) -> Result<Self, AudioError> {
        let sink = Sink::connect_new(mixer);
        let source = Self {
            sink,
            clip: clip.clone(),
            looping,
            state: PlaybackState::Stopped,
        };
        source.queue_clip()?;
        source.sink.pause(); // Start paused
        Ok(source)
    }

    /// Decode the clip and append it to the sink
    fn queue_clip(&self) -> Result<(), AudioError> {
        let cursor = Cursor::new(self.clip.bytes());
        let decoded = Decoder::new(cursor).map_err(|e| AudioError::DecodeError(e.to_string()))?;
        if self.looping {
            self.sink.append(decoded.repeat_infinite());
        } else {
            self.sink.append(decoded);
        }
        Ok(())
    }

    /// Get the clip this source plays
    #[must_use]
    pub fn clip(&self) -> &AudioClip {
        &self.clip
    }

    /// Check if looping is enabled
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Check if the source has played through its clip
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    /// Get the current playback state
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.sink.empty() && self.state == PlaybackState::Playing {
            PlaybackState::Stopped
        } else {
            self.state
        }
    }
}

impl AudioEmitter for AudioSource {
    fn gain(&self) -> f32 {
        self.sink.volume()
    }

    fn set_gain(&mut self, gain: f32) {
        self.sink.set_volume(gain.max(0.0));
    }

    fn play(&mut self) {
        // A stopped sink has an empty queue; requeue before resuming.
        if self.sink.empty() {
            if let Err(e) = self.queue_clip() {
                log::warn!("failed to requeue clip '{}': {e}", self.clip.name());
                return;
            }
        }
        self.sink.play();
        self.state = PlaybackState::Playing;
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.state = PlaybackState::Stopped;
    }
}

impl std::fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSource")
            .field("clip", &self.clip.name())
            .field("state", &self.state)
            .field("looping", &self.looping)
            .field("gain", &self.sink.volume())
            .finish()
    }
}

/// Errors that can occur during audio operations
#[derive(Debug, Clone)]
pub enum AudioError {
    /// IO error reading a file
    IoError(String),
    /// Error decoding audio data
    DecodeError(String),
    /// No audio device available
    NoDevice,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DecodeError(e) => write!(f, "Decode error: {e}"),
            Self::NoDevice => write!(f, "No audio output device available"),
        }
    }
}

impl std::error::Error for AudioError {}

//! Audio output device management

use rodio::{OutputStream, OutputStreamBuilder, mixer::Mixer};

use super::clip::AudioClip;
use super::source::{AudioError, AudioSource};

/// Owns the audio output stream and hands out sources playing into it
pub struct AudioOutput {
    /// The output stream (must be kept alive)
    _stream: OutputStream,
    /// The mixer for creating sinks
    mixer: Mixer,
}

impl AudioOutput {
    /// Open the default audio output device
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is available
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::from_default_device()
            .map_err(|_| AudioError::NoDevice)?
            .open_stream()
            .map_err(|_| AudioError::NoDevice)?;
        let mixer = stream.mixer().clone();

        log::info!("audio output device opened");

        Ok(Self {
            _stream: stream,
            mixer,
        })
    }

    /// Create a source playing the given clip into this output
    ///
    /// # Errors
    ///
    /// Returns an error if the clip cannot be decoded
    pub fn create_source(
        &self,
        clip: &AudioClip,
        looping: bool,
    ) -> Result<AudioSource, AudioError> {
        AudioSource::from_clip(&self.mixer, clip, looping)
    }

    /// Get the mixer for creating custom sources
    #[must_use]
    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }
}

impl std::fmt::Debug for AudioOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioOutput").finish_non_exhaustive()
    }
}

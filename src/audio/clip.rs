//! In-memory audio clip assets

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::source::AudioError;

/// An encoded audio asset held in memory.
///
/// Clips are cheap to clone: the encoded bytes are shared behind an `Arc`.
/// Decoding happens when the clip is attached to an [`super::AudioSource`].
#[derive(Clone)]
pub struct AudioClip {
    /// Clip name for debugging
    name: String,
    /// Encoded audio data (WAV, MP3, OGG, or FLAC)
    bytes: Arc<[u8]>,
}

impl AudioClip {
    /// Load a clip from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let bytes = fs::read(path).map_err(|e| AudioError::IoError(e.to_string()))?;
        Ok(Self {
            name,
            bytes: bytes.into(),
        })
    }

    /// Create a clip from encoded bytes
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Get the clip name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shared encoded bytes
    #[must_use]
    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Get the encoded size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the clip holds no data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioClip")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

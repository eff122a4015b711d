//! Tuning parameters for contact-reactive audio
//!
//! Supports loading and saving in RON (Rusty Object Notation) and JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Tuning surface of a [`super::ContactReactiveAudio`] behavior.
///
/// Set externally (by hand or from a file), read-only to the behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactAudioParams {
    /// Peak gain of the continuous rolling sound
    pub max_volume: f32,
    /// Tangential speed at which the rolling sound reaches `max_volume`
    pub max_velocity_for_volume: f32,
    /// Normal impulse at which a thud reaches full gain
    pub thud_max_impulse_for_volume: f32,
    /// Minimum normal impulse (exclusive) for a contact to trigger a thud
    pub thud_threshold: f32,
    /// Path of the clip played by the one-shot thud source
    pub thud_clip: Option<PathBuf>,
}

impl Default for ContactAudioParams {
    fn default() -> Self {
        Self {
            max_volume: 1.0,
            max_velocity_for_volume: 10.0,
            thud_max_impulse_for_volume: 50.0,
            thud_threshold: 0.0,
            thud_clip: None,
        }
    }
}

impl ContactAudioParams {
    /// Save the parameters to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ParamsError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ParamsError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load parameters from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path).map_err(|e| ParamsError::IoError(e.to_string()))?;
        let params: Self =
            ron::from_str(&content).map_err(|e| ParamsError::DeserializeError(e.to_string()))?;
        Ok(params)
    }

    /// Save the parameters to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ParamsError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ParamsError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load parameters from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path).map_err(|e| ParamsError::IoError(e.to_string()))?;
        let params: Self = serde_json::from_str(&content)
            .map_err(|e| ParamsError::DeserializeError(e.to_string()))?;
        Ok(params)
    }
}

/// Errors that can occur loading or saving parameters
#[derive(Debug, Clone)]
pub enum ParamsError {
    /// IO error reading or writing a file
    IoError(String),
    /// Serialization failed
    SerializeError(String),
    /// Deserialization failed
    DeserializeError(String),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialize error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialize error: {e}"),
        }
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ContactAudioParams::default();
        assert_eq!(params.max_volume, 1.0);
        assert_eq!(params.max_velocity_for_volume, 10.0);
        assert_eq!(params.thud_max_impulse_for_volume, 50.0);
        assert_eq!(params.thud_threshold, 0.0);
        assert!(params.thud_clip.is_none());
    }

    #[test]
    fn test_partial_ron_document_fills_defaults() {
        let params: ContactAudioParams =
            ron::from_str("(max_volume: 0.8, thud_threshold: 12.5)").unwrap();
        assert_eq!(params.max_volume, 0.8);
        assert_eq!(params.thud_threshold, 12.5);
        assert_eq!(params.max_velocity_for_volume, 10.0);
    }

    #[test]
    fn test_json_document() {
        let params: ContactAudioParams =
            serde_json::from_str(r#"{"thud_clip": "sounds/thud.wav"}"#).unwrap();
        assert_eq!(params.thud_clip.as_deref(), Some(Path::new("sounds/thud.wav")));
    }
}

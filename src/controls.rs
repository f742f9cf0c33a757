//! Step sizes and sensitivities for [`CameraController`](crate::CameraController).
//!
//! Controls can be loaded from a TOML file. Every key is optional:
//!
//! ```toml
//! move_speed = 0.2
//! mouse_sensitivity = 0.002
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ControlsError;

/// Tunable constants for the built-in camera modes.
///
/// Speeds are per update call, except `orbital_speed` which is radians per
/// second and scaled by the frame time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraControls {
    /// Distance moved per update while a movement key is held.
    pub move_speed: f32,
    /// Radians rotated per update while an arrow key is held.
    pub rotation_speed: f32,
    /// Distance panned per update in free mode.
    pub pan_speed: f32,
    /// Radians per pixel of mouse movement.
    pub mouse_sensitivity: f32,
    /// Dolly distance per wheel line.
    pub scroll_sensitivity: f32,
    /// Orbital mode rotation in radians per second.
    pub orbital_speed: f32,
    /// Dolly distance per press of the keypad plus/minus keys.
    pub keypad_zoom_step: f32,
    /// Stick deflection below which gamepad movement is ignored.
    pub gamepad_dead_zone: f32,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            move_speed: 0.09,
            rotation_speed: 0.03,
            pan_speed: 0.2,
            mouse_sensitivity: 0.003,
            scroll_sensitivity: 0.2,
            orbital_speed: 0.5,
            keypad_zoom_step: 2.0,
            gamepad_dead_zone: 0.25,
        }
    }
}

impl CameraControls {
    /// Parse controls from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ControlsError> {
        let controls: CameraControls = toml::from_str(source)?;
        controls.validate()?;
        Ok(controls)
    }

    /// Read and parse a controls file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ControlsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ControlsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let controls = Self::from_toml_str(&source)?;
        log::debug!("Loaded camera controls from {}: {:?}", path.display(), controls);
        Ok(controls)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    fn validate(&self) -> Result<(), ControlsError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
            ("pan_speed", self.pan_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("orbital_speed", self.orbital_speed),
            ("keypad_zoom_step", self.keypad_zoom_step),
            ("gamepad_dead_zone", self.gamepad_dead_zone),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ControlsError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

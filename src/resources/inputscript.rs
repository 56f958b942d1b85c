//! Scripted input for headless runs.
//!
//! An [`InputScript`] is a JSON list of frames. Each frame may set the
//! movement axis and the run button, and may repeat for several ticks:
//!
//! ```json
//! { "frames": [
//!     { "move": [1.0, 0.0], "repeat": 30 },
//!     { "run": true, "repeat": 60 },
//!     { "move": [0.0, 0.0], "run": false },
//!     { "repeat": 10 }
//! ] }
//! ```
//!
//! Values persist until a later frame changes them, like held keys.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::character::LocomotionError;

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// New movement axis, `[x, y]`.
    #[serde(default, rename = "move", skip_serializing_if = "Option::is_none")]
    pub move_axis: Option<[f32; 2]>,
    /// New run button state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<bool>,
    /// Number of ticks this frame lasts. Input is applied on the first.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    pub fn from_json_str(json: &str) -> Result<Self, LocomotionError> {
        let script: InputScript =
            serde_json::from_str(json).map_err(|e| LocomotionError::Script(e.to_string()))?;
        for (i, frame) in script.frames.iter().enumerate() {
            if let Some([x, y]) = frame.move_axis {
                if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
                    return Err(LocomotionError::Script(format!(
                        "frame {}: move axis ({}, {}) outside [-1, 1]",
                        i, x, y
                    )));
                }
            }
        }
        Ok(script)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LocomotionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LocomotionError::Script(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Total number of ticks the script runs for.
    pub fn tick_count(&self) -> u64 {
        self.frames.iter().map(|f| f.repeat as u64).sum()
    }
}

//! Game configuration resource.
//!
//! Window settings and locomotion tuning loaded from an INI configuration
//! file. Defaults are safe for startup; missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [locomotion]
//! rotation_speed = 15.0
//! run_multiplier = 3.0
//! ground_gravity = -0.05
//! gravity = -9.8
//! clamp_rotation_factor = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const DEFAULT_ROTATION_SPEED: f32 = 15.0;
const DEFAULT_RUN_MULTIPLIER: f32 = 3.0;
const DEFAULT_GROUND_GRAVITY: f32 = -0.05;
const DEFAULT_GRAVITY: f32 = -9.8;
const DEFAULT_CLAMP_ROTATION_FACTOR: bool = true;

/// Constants used by the locomotion systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionTuning {
    /// Multiplied by the frame delta to get the per-frame rotation slerp factor.
    pub rotation_speed: f32,
    /// Run velocity = walk velocity * this, per planar axis.
    pub run_multiplier: f32,
    /// Vertical velocity while grounded. Small and negative so the mover
    /// keeps reporting ground contact.
    pub ground_gravity: f32,
    /// Added to the vertical velocity every airborne frame.
    pub gravity: f32,
    /// Clamp the rotation slerp factor to `[0, 1]`. When false, long frames
    /// overshoot the target direction.
    pub clamp_rotation_factor: bool,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            run_multiplier: DEFAULT_RUN_MULTIPLIER,
            ground_gravity: DEFAULT_GROUND_GRAVITY,
            gravity: DEFAULT_GRAVITY,
            clamp_rotation_factor: DEFAULT_CLAMP_ROTATION_FACTOR,
        }
    }
}

impl LocomotionTuning {
    /// Slerp factor for a frame of `delta` seconds.
    pub fn rotation_factor(&self, delta: f32) -> f32 {
        let t = self.rotation_speed * delta;
        if self.clamp_rotation_factor {
            t.clamp(0.0, 1.0)
        } else {
            t
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Locomotion constants.
    pub locomotion: LocomotionTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            locomotion: LocomotionTuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [locomotion] section
        let tuning = &mut self.locomotion;
        if let Some(v) = config.getfloat("locomotion", "rotation_speed").ok().flatten() {
            tuning.rotation_speed = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "run_multiplier").ok().flatten() {
            tuning.run_multiplier = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "ground_gravity").ok().flatten() {
            tuning.ground_gravity = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "gravity").ok().flatten() {
            tuning.gravity = v as f32;
        }
        if let Some(v) = config
            .getbool("locomotion", "clamp_rotation_factor")
            .ok()
            .flatten()
        {
            tuning.clamp_rotation_factor = v;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, locomotion={:?}",
            self.window_width, self.window_height, self.target_fps, self.locomotion
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [locomotion] section
        let tuning = &self.locomotion;
        config.set(
            "locomotion",
            "rotation_speed",
            Some(tuning.rotation_speed.to_string()),
        );
        config.set(
            "locomotion",
            "run_multiplier",
            Some(tuning.run_multiplier.to_string()),
        );
        config.set(
            "locomotion",
            "ground_gravity",
            Some(tuning.ground_gravity.to_string()),
        );
        config.set("locomotion", "gravity", Some(tuning.gravity.to_string()));
        config.set(
            "locomotion",
            "clamp_rotation_factor",
            Some(tuning.clamp_rotation_factor.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "aberred_locomotion_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.locomotion.rotation_speed, 15.0);
        assert_eq!(config.locomotion.run_multiplier, 3.0);
        assert_eq!(config.locomotion.ground_gravity, -0.05);
        assert_eq!(config.locomotion.gravity, -9.8);
        assert!(config.locomotion.clamp_rotation_factor);
    }

    #[test]
    fn test_rotation_factor_clamped() {
        let tuning = LocomotionTuning::default();
        assert!((tuning.rotation_factor(1.0 / 60.0) - 0.25).abs() < 1e-6);
        assert_eq!(tuning.rotation_factor(0.5), 1.0);
    }

    #[test]
    fn test_rotation_factor_unclamped() {
        let tuning = LocomotionTuning {
            clamp_rotation_factor: false,
            ..LocomotionTuning::default()
        };
        assert!((tuning.rotation_factor(0.5) - 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing_nonexistent"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.locomotion, LocomotionTuning::default());
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_config_path("partial");
        std::fs::write(
            &path,
            "[locomotion]\nrun_multiplier = 2.5\nclamp_rotation_factor = false\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.locomotion.run_multiplier, 2.5);
        assert!(!config.locomotion.clamp_rotation_factor);
        assert_eq!(config.locomotion.rotation_speed, 15.0);
        assert_eq!(config.window_width, 1280);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("save");
        let mut config = GameConfig::with_path(&path);
        config.window_width = 800;
        config.locomotion.gravity = -20.0;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 800);
        assert_eq!(loaded.locomotion.gravity, -20.0);

        std::fs::remove_file(&path).ok();
    }
}

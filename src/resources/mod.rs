//! ECS resources made available to systems.
//!
//! Overview
//! - `camera3d` – third-person camera used by the demo renderer
//! - `gameconfig` – window settings and locomotion tuning from `config.ini`
//! - `input` – key bindings and input edge tracking
//! - `inputscript` – JSON input scripts for headless replays
//! - `worldtime` – simulation time and delta
pub mod camera3d;
pub mod gameconfig;
pub mod input;
pub mod inputscript;
pub mod worldtime;

//! Aberred Locomotion library.
//!
//! Third-person walk/run locomotion as bevy_ecs components, events and
//! systems: input events update a character's movement intent, and each
//! frame rotates it towards its heading, mirrors walk/run into its animator,
//! applies gravity and hands the motion to its character controller.
//!
//! Exposed as a library for integration tests and headless replays.

pub mod character;
pub mod components;
pub mod events;
pub mod replay;
pub mod resources;
pub mod systems;

//! Input subscription switch.
//!
//! A character only listens to locomotion input while its
//! [`CharacterControls`] are enabled. See [`crate::character::start`] and
//! [`crate::character::stop`].

use bevy_ecs::prelude::Component;

/// Whether the character's input action map is subscribed.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CharacterControls {
    enabled: bool,
}

impl CharacterControls {
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

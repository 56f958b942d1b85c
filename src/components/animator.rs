//! Animation graph parameters.
//!
//! The [`Animator`] component is the parameter block of a character's
//! animation graph. Locomotion only drives two boolean parameters, listed in
//! [`AnimParam`], but the store accepts any name so other systems can share
//! it.
//!
//! Parameters can be addressed three ways, all reading and writing the same
//! slot:
//! - by [`AnimParam`] (preferred inside the crate)
//! - by name, e.g. `"isWalking"`
//! - by precomputed hash, see [`param_hash`]

use bevy_ecs::prelude::Component;
use log::debug;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Boolean parameters driven by the locomotion systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimParam {
    /// True while movement input is held.
    IsWalking,
    /// True while movement input and the run button are both held.
    IsRunning,
}

impl AnimParam {
    /// Name of the parameter in the animation graph.
    pub fn name(&self) -> &'static str {
        match self {
            AnimParam::IsWalking => "isWalking",
            AnimParam::IsRunning => "isRunning",
        }
    }

    /// Hash of [`AnimParam::name`].
    pub fn hash(&self) -> i32 {
        param_hash(self.name())
    }
}

/// Stable 32-bit id for a parameter name.
pub fn param_hash(name: &str) -> i32 {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);
    hasher.finish() as i32
}

/// Boolean parameter store of an animation graph.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    bools: FxHashMap<i32, bool>,
    writes: u32,
}

impl Animator {
    /// Empty parameter block. Every parameter reads as `false`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_bool(&self, param: AnimParam) -> bool {
        self.get_bool_by_hash(param.hash())
    }

    pub fn set_bool(&mut self, param: AnimParam, value: bool) {
        self.set_bool_by_hash(param.hash(), value);
    }

    pub fn get_bool_by_name(&self, name: &str) -> bool {
        self.get_bool_by_hash(param_hash(name))
    }

    pub fn set_bool_by_name(&mut self, name: &str, value: bool) {
        self.set_bool_by_hash(param_hash(name), value);
    }

    /// Read a parameter by hash. Unknown parameters are `false`.
    pub fn get_bool_by_hash(&self, hash: i32) -> bool {
        self.bools.get(&hash).copied().unwrap_or(false)
    }

    /// Write a parameter by hash.
    ///
    /// Every call counts as a write, even when the value does not change;
    /// callers that want edge-triggered behaviour must compare first.
    pub fn set_bool_by_hash(&mut self, hash: i32, value: bool) {
        debug!("animator: param {} = {}", hash, value);
        self.bools.insert(hash, value);
        self.writes = self.writes.wrapping_add(1);
    }

    /// Number of parameter writes since creation.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_names() {
        assert_eq!(AnimParam::IsWalking.name(), "isWalking");
        assert_eq!(AnimParam::IsRunning.name(), "isRunning");
    }

    #[test]
    fn test_param_hash_is_stable_and_distinct() {
        assert_eq!(param_hash("isWalking"), param_hash("isWalking"));
        assert_eq!(AnimParam::IsWalking.hash(), param_hash("isWalking"));
        assert_ne!(AnimParam::IsWalking.hash(), AnimParam::IsRunning.hash());
    }

    #[test]
    fn test_unknown_params_read_false() {
        let animator = Animator::new();
        assert!(!animator.get_bool(AnimParam::IsWalking));
        assert!(!animator.get_bool_by_name("isJumping"));
        assert_eq!(animator.writes(), 0);
    }

    #[test]
    fn test_addressing_modes_share_a_slot() {
        let mut animator = Animator::new();
        animator.set_bool_by_name("isWalking", true);
        assert!(animator.get_bool(AnimParam::IsWalking));
        assert!(animator.get_bool_by_hash(AnimParam::IsWalking.hash()));

        animator.set_bool_by_hash(AnimParam::IsRunning.hash(), true);
        assert!(animator.get_bool_by_name("isRunning"));

        animator.set_bool(AnimParam::IsWalking, false);
        assert!(!animator.get_bool_by_name("isWalking"));
        assert!(animator.get_bool(AnimParam::IsRunning));
    }

    #[test]
    fn test_every_set_counts_as_write() {
        let mut animator = Animator::new();
        animator.set_bool(AnimParam::IsWalking, true);
        animator.set_bool(AnimParam::IsWalking, true);
        assert_eq!(animator.writes(), 2);
    }
}

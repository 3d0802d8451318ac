//! Physics glue module
//!
//! Capsule collider + Rapier character controller, плюс headless stand-in.
//! Rapier — collision collaborator: velocity интегрирует movement домен.

pub mod character;
pub mod headless;

// Re-export основных типов
pub use character::{
    character_controller, spawn_player, sync_grounded_from_rapier, CAPSULE_HALF_HEIGHT,
    CAPSULE_RADIUS, STANDING_HEIGHT,
};
pub use headless::integrate_headless_motion;

use bevy::prelude::*;

use crate::movement::ControllerSet;

/// Rapier collision collaborator (клиент)
///
/// Сам RapierPhysicsPlugin добавляет host; здесь только grounded sync.
pub struct RapierCharacterPlugin;

impl Plugin for RapierCharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            sync_grounded_from_rapier.in_set(ControllerSet::Collision),
        );
    }
}

/// Headless stand-in: пол y = 0 вместо Rapier
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_headless_motion.in_set(ControllerSet::Integrate),
        );
    }
}

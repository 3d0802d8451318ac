//! Movement domain — player controller
//!
//! Содержит:
//! - controller: чистый тик (MovementState::tick, FrameClock, MovementStep)
//! - systems: validate/update/consume (FixedUpdate)
//! - PlayerJumped (event для прыжка)

pub mod controller;
pub mod events;
pub mod systems;


pub use controller::*;
pub use events::*;
pub use systems::*;

use bevy::prelude::*;
use bevy_rapier3d::plugin::PhysicsSet;

use crate::lives::{sync_disable_while_dead, LifeStateChanged};

/// Порядок фаз контроллера внутри FixedUpdate
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Источники PlayerInput внутри симуляции (scripted бот)
    Input,
    /// Grounded флаг от collision collaborator'а
    Collision,
    /// Lives → тик контроллера → сброс jump
    Movement,
    /// Применение displacement (headless stand-in)
    Integrate,
}

/// Plugin для player controller
///
/// Регистрирует все системы в FixedUpdate для детерминизма.
///
/// Порядок выполнения:
/// 1. sync_disable_while_dead — active флаги вспомогательных объектов
/// 2. update_player_movement — тик + запрос на смещение + yaw
/// 3. consume_latched_input — нажатие и mouse look тратятся один раз
pub struct PlayerControllerPlugin;

impl Plugin for PlayerControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerJumped>()
            .add_event::<LifeStateChanged>();

        app.configure_sets(
            FixedUpdate,
            (
                ControllerSet::Input,
                ControllerSet::Collision,
                ControllerSet::Movement,
                ControllerSet::Integrate,
            )
                .chain()
                .before(PhysicsSet::SyncBackend), // До rapier physics step
        );

        app.add_systems(PreUpdate, validate_character_controllers);

        app.add_systems(
            FixedUpdate,
            (
                sync_disable_while_dead,
                update_player_movement,
                consume_latched_input,
            )
                .chain() // Последовательное выполнение
                .in_set(ControllerSet::Movement),
        );
    }
}

//! Capsule character body на Rapier
//!
//! Архитектура:
//! - RigidBody::KinematicPositionBased + Collider::capsule_y
//! - KinematicCharacterController принимает displacement за тик (translation)
//! - KinematicCharacterControllerOutput.grounded → наш `Grounded`
//!
//! Velocity интегрируем сами (MovementState), Rapier только разрешает коллизии.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{
    Active, DisableWhileDead, Grounded, Lives, MovementState, Player, PlayerInput,
};
use crate::config::PlayerControllerSettings;

/// Половина высоты цилиндрической части капсулы (m)
pub const CAPSULE_HALF_HEIGHT: f32 = 0.5;
/// Радиус капсулы (m)
pub const CAPSULE_RADIUS: f32 = 0.4;
/// Высота центра капсулы над полом, когда персонаж стоит (m)
pub const STANDING_HEIGHT: f32 = CAPSULE_HALF_HEIGHT + CAPSULE_RADIUS;

/// Копирование grounded флага из Rapier output
///
/// Output появляется после первого move; до этого считаемся в воздухе.
pub fn sync_grounded_from_rapier(
    mut bodies: Query<(&mut Grounded, Option<&KinematicCharacterControllerOutput>), With<Player>>,
) {
    for (mut grounded, output) in bodies.iter_mut() {
        let on_ground = output.is_some_and(|o| o.grounded);
        grounded.set_if_neq(Grounded(on_ground));
    }
}

/// Character controller с настройками под наш движок прыжков
///
/// - autostep выключен (ступеньки не нужны)
/// - snap_to_ground выключен: иначе первый тик после прыжка притягивает обратно к полу
pub fn character_controller() -> KinematicCharacterController {
    KinematicCharacterController {
        autostep: None,
        snap_to_ground: None,
        ..default()
    }
}

/// Spawn helper для игрока
///
/// Создает entity с полным набором компонентов:
/// - Transform (позиция центра капсулы)
/// - Player + MovementState + PlayerInput + Grounded + Lives
/// - PlayerControllerSettings
/// - Rapier: RigidBody + Collider (capsule) + KinematicCharacterController
///
/// `auxiliary` — объекты, которые прячутся пока игрок мёртв (получают `Active`).
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    settings: PlayerControllerSettings,
    lives: Lives,
    auxiliary: Vec<Entity>,
) -> Entity {
    for &object in auxiliary.iter() {
        commands.entity(object).insert(Active(lives.is_alive()));
    }

    commands
        .spawn((
            Transform::from_translation(position),
            Player,
            MovementState::default(),
            PlayerInput::default(),
            Grounded::default(),
            settings,
            lives,
            DisableWhileDead(auxiliary),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            character_controller(),
        ))
        .id()
}

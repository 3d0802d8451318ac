//! Movement systems (FixedUpdate)
//!
//! Читают: PlayerInput, Grounded, Lives, Time<Fixed>
//! Пишут: MovementState, KinematicCharacterController.translation, Transform (yaw)

use bevy::prelude::*;
use bevy_rapier3d::prelude::KinematicCharacterController;

use crate::components::{ControllerDisabled, Grounded, Lives, MovementState, Player, PlayerInput};
use crate::config::PlayerControllerSettings;
use crate::logger;

use super::controller::{apply_yaw, FrameClock};
use super::events::PlayerJumped;

/// Проверка collision компонента у нового игрока
///
/// Без `KinematicCharacterController` двигать тело нечем: пишем ошибку один раз
/// и помечаем контроллер `ControllerDisabled`. Entity остаётся в мире.
pub fn validate_character_controllers(
    mut commands: Commands,
    players: Query<(Entity, Has<KinematicCharacterController>), Added<Player>>,
) {
    for (entity, has_controller) in players.iter() {
        if has_controller {
            continue;
        }

        logger::log_error(&format!(
            "Player {:?} has no KinematicCharacterController; movement disabled",
            entity
        ));
        commands.entity(entity).insert(ControllerDisabled);
    }
}

/// Главный тик контроллера игрока
///
/// Мёртвый игрок (lives ≤ 0) не двигается и не поворачивается: translation
/// сбрасывается, MovementState не трогаем.
pub fn update_player_movement(
    mut players: Query<
        (
            Entity,
            &PlayerControllerSettings,
            &PlayerInput,
            &Grounded,
            &Lives,
            &mut MovementState,
            &mut Transform,
            &mut KinematicCharacterController,
        ),
        (With<Player>, Without<ControllerDisabled>),
    >,
    mut jump_events: EventWriter<PlayerJumped>,
    time: Res<Time<Fixed>>,
) {
    let clock = FrameClock::new(time.delta_secs(), time.elapsed_secs());

    for (entity, settings, input, grounded, lives, mut state, mut transform, mut controller) in
        players.iter_mut()
    {
        if !lives.is_alive() {
            controller.translation = None;
            continue;
        }

        let step = state.tick(settings, input, grounded.0, transform.rotation, clock);

        controller.translation = Some(step.displacement);
        apply_yaw(&mut transform, step.yaw_delta);

        if let Some(kind) = step.jump {
            logger::log(&format!("Player {:?} jump: {:?}", entity, kind));
            jump_events.write(PlayerJumped { entity, kind });
        }
    }
}

/// Сброс latched input'а после тика (jump + накопленный mouse look)
///
/// Input собирается в Update, а FixedUpdate может за кадр отработать 0..N раз:
/// нажатие и движение мыши держатся до первого fixed тика и тратятся ровно один раз.
pub fn consume_latched_input(mut inputs: Query<&mut PlayerInput, With<Player>>) {
    for mut input in inputs.iter_mut() {
        if input.jump || input.look_pending != 0.0 {
            input.jump = false;
            input.look_pending = 0.0;
        }
    }
}

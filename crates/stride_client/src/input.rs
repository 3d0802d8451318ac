//! Player input (клавиатура + мышь → PlayerInput)
//!
//! ```text
//! ButtonInput<KeyCode> / MouseMotion
//!     ↓
//! collect_player_input (Update)
//!     ↓
//! PlayerInput (ECS component) → FixedUpdate movement
//! ```

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use stride_simulation::{log_info, Lives, Player, PlayerInput};

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .add_systems(Update, (collect_player_input, debug_life_keys));
    }
}

/// Раскладка клавиш
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub turn_left: KeyCode,
    pub turn_right: KeyCode,
    pub jump: KeyCode,
    /// Mouse X (пиксели) → look axis
    pub mouse_sensitivity: f32,
    /// Debug: отнять жизнь
    pub lose_life: KeyCode,
    /// Debug: восстановить жизни
    pub restore_lives: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            turn_left: KeyCode::KeyQ,
            turn_right: KeyCode::KeyE,
            jump: KeyCode::Space,
            mouse_sensitivity: 0.1,
            lose_life: KeyCode::KeyK,
            restore_lives: KeyCode::KeyR,
        }
    }
}

/// +1 / -1 / 0 (обе или ни одной)
fn axis(keys: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if keys.pressed(positive) {
        value += 1.0;
    }
    if keys.pressed(negative) {
        value -= 1.0;
    }
    value
}

/// Сбор input'а в PlayerInput
///
/// Клавиши — level значения, перезаписываются каждый кадр. Jump (just_pressed)
/// и mouse look только накапливаются: сбрасывает их FixedUpdate
/// (`consume_latched_input`), иначе ввод между fixed тиками теряется
/// или применяется дважды.
fn collect_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    bindings: Res<InputBindings>,
    time: Res<Time>,
    mut players: Query<&mut PlayerInput, With<Player>>,
) {
    let mouse_dx: f32 = mouse_motion.read().map(|motion| motion.delta.x).sum();

    let Ok(mut input) = players.single_mut() else {
        return;
    };

    input.move_axes = Vec2::new(
        axis(&keys, bindings.right, bindings.left),
        axis(&keys, bindings.forward, bindings.back),
    )
    .clamp_length_max(1.0);

    input.look_axis = axis(&keys, bindings.turn_left, bindings.turn_right);

    // Мышь вправо → поворот вправо (отрицательный yaw)
    if mouse_dx != 0.0 {
        let mouse_look = (-mouse_dx * bindings.mouse_sensitivity).clamp(-1.0, 1.0);
        input.look_pending += mouse_look * time.delta_secs();
    }

    if keys.just_pressed(bindings.jump) {
        input.jump = true;
    }
}

/// Debug: K — минус жизнь, R — полное восстановление
fn debug_life_keys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut players: Query<&mut Lives, With<Player>>,
) {
    let Ok(mut lives) = players.single_mut() else {
        return;
    };

    if keys.just_pressed(bindings.lose_life) {
        lives.lose_life();
        log_info(&format!("Lives: {}/{}", lives.current, lives.max));
    }
    if keys.just_pressed(bindings.restore_lives) {
        lives.restore();
        log_info(&format!("Lives restored: {}/{}", lives.current, lives.max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn test_axis_cancels_opposite_keys() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        assert_eq!(axis(&keys, KeyCode::KeyW, KeyCode::KeyS), 1.0);

        keys.press(KeyCode::KeyS);
        assert_eq!(axis(&keys, KeyCode::KeyW, KeyCode::KeyS), 0.0);

        keys.release(KeyCode::KeyW);
        assert_eq!(axis(&keys, KeyCode::KeyW, KeyCode::KeyS), -1.0);
    }

    /// Update-only app: render кадры без fixed тиков между ними
    fn input_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                1.0 / 144.0,
            )))
            .add_event::<MouseMotion>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<InputBindings>()
            .add_systems(Update, collect_player_input);
        app
    }

    #[test]
    fn test_mouse_look_accumulates_between_fixed_ticks() {
        let mut app = input_app();
        let player = app
            .world_mut()
            .spawn((Player, PlayerInput::default()))
            .id();

        // Три кадра по 10px вправо, потом кадр без движения мыши
        let mut frame_time = 0.0;
        for dx in [10.0, 10.0, 10.0, 0.0] {
            if dx != 0.0 {
                app.world_mut().send_event(MouseMotion {
                    delta: Vec2::new(dx, 0.0),
                });
            }
            app.update();
            if dx != 0.0 {
                frame_time += app.world().resource::<Time>().delta_secs();
            }
        }

        let input = *app.world().get::<PlayerInput>(player).unwrap();
        // 10px * 0.1 → полное отклонение вправо на каждом кадре с движением
        assert!(frame_time > 0.0);
        assert!((input.look_pending + frame_time).abs() < 1e-6, "input = {:?}", input);
        assert_eq!(input.look_axis, 0.0, "keys are level values, mouse is not");
    }
}

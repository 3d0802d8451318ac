//! Scripted input для headless прогонов
//!
//! Вместо клавиатуры — seeded RNG (`DeterministicRng`): одинаковый seed даёт
//! одинаковую последовательность input'а и, значит, одинаковую траекторию.

use bevy::prelude::*;
use rand::Rng;

use crate::components::{Player, PlayerInput};
use crate::DeterministicRng;

/// Бот, меняющий input каждые `hold_ticks` тиков
#[derive(Component, Debug, Clone, Copy)]
pub struct ScriptedInput {
    /// Сколько тиков держать выбранные оси
    pub hold_ticks: u32,
    /// Вероятность нажать прыжок в конкретном тике (вне [0, 1] — clamp)
    pub jump_chance: f64,
    pub ticks_left: u32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            hold_ticks: 30,
            jump_chance: 0.05,
            ticks_left: 0,
        }
    }
}

impl ScriptedInput {
    /// `jump_chance`, пригодная для `gen_bool` (NaN → никогда)
    pub fn jump_probability(&self) -> f64 {
        if self.jump_chance.is_nan() {
            0.0
        } else {
            self.jump_chance.clamp(0.0, 1.0)
        }
    }
}

/// Заполняет PlayerInput из RNG (FixedUpdate, до movement)
pub fn drive_scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut players: Query<(&mut ScriptedInput, &mut PlayerInput), With<Player>>,
) {
    for (mut script, mut input) in players.iter_mut() {
        if script.ticks_left == 0 {
            input.move_axes = Vec2::new(
                rng.rng.gen_range(-1.0..=1.0),
                rng.rng.gen_range(-1.0..=1.0),
            )
            .clamp_length_max(1.0);
            input.look_axis = rng.rng.gen_range(-1.0..=1.0);
            script.ticks_left = script.hold_ticks.max(1);
        }
        script.ticks_left -= 1;

        if rng.rng.gen_bool(script.jump_probability()) {
            input.jump = true;
        }
    }
}

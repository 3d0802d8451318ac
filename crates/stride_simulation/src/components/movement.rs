//! Movement компоненты: input, grounded флаг, состояние прыжков

use bevy::prelude::*;

/// Вертикальная скорость "прижатия" к земле (m/s)
///
/// Без неё ground check на склонах мигает между grounded/airborne.
pub const GROUNDED_REST_VELOCITY: f32 = -0.3;

/// Входные данные игрока за кадр
///
/// Заполняется input системой клиента (или `ScriptedInput` в headless).
/// Симуляция не читает глобальный input — только этот компонент.
///
/// # Coordinate System
/// - `move_axes.x`: -1.0 (left) → +1.0 (right)
/// - `move_axes.y`: -1.0 (back) → +1.0 (forward, local -Z)
/// - `look_axis`: -1.0 (turn right) → +1.0 (turn left), yaw по Y
/// - `look_pending`: накопленный look (axis · сек) от мыши между fixed тиками
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    pub move_axes: Vec2,
    /// Level значение (клавиши): держится пока зажато
    pub look_axis: f32,
    /// Мышь уже проинтегрирована по времени кадра; тратится `consume_latched_input`
    pub look_pending: f32,
    /// just_pressed; держится до `consume_latched_input`
    pub jump: bool,
}

/// Стоит ли тело на walkable поверхности (пишет collision слой)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

/// Состояние движения игрока, переживает кадры
///
/// Инварианты:
/// - `velocity.y` накапливает gravity/jump дугу между кадрами
/// - `double_jump_available` тратится максимум один раз за airborne фазу
/// - `leniency_deadline` закрывается любым прыжком
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementState {
    pub velocity: Vec3,
    pub double_jump_available: bool,
    /// Абсолютное время (сек), до которого airborne прыжок считается наземным
    pub leniency_deadline: Option<f32>,
}

/// Какой прыжок сработал в этом кадре
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum JumpKind {
    /// С земли
    Ground,
    /// В окне leniency после схода с края
    Leniency,
    /// Единственный дополнительный прыжок в воздухе
    Double,
}

//! Per-frame movement update (ground/air движение, прыжки, gravity, yaw)
//!
//! Чистая логика без ECS: система собирает input/grounded/clock и вызывает
//! `MovementState::tick`, результат отдаётся character collider'у.
//!
//! Порядок за кадр:
//! 1. grounded → обновить double jump + leniency окно, посчитать горизонтальную скорость
//! 2. прыжок (ground / leniency / double)
//! 3. gravity интегрируется всегда
//! 4. grounded + падение → прижать к земле (`GROUNDED_REST_VELOCITY`)
//! 5. displacement = velocity * dt, yaw delta из look axis

use bevy::prelude::*;

use crate::components::{JumpKind, MovementState, PlayerInput, GROUNDED_REST_VELOCITY};
use crate::config::PlayerControllerSettings;

/// Время кадра от clock collaborator'а
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Длительность тика (сек)
    pub delta: f32,
    /// Абсолютное время симуляции (сек)
    pub now: f32,
}

impl FrameClock {
    pub fn new(delta: f32, now: f32) -> Self {
        Self { delta, now }
    }
}

/// Результат одного тика
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    /// Скорость после gravity и clamp'а
    pub velocity: Vec3,
    /// Запрос на смещение тела за этот тик
    pub displacement: Vec3,
    /// Поворот вокруг мировой Y (радианы)
    pub yaw_delta: f32,
    pub jump: Option<JumpKind>,
}

impl MovementState {
    /// Один simulation тик контроллера
    ///
    /// `facing` — текущая ориентация тела, input трактуется в её локальных осях.
    pub fn tick(
        &mut self,
        settings: &PlayerControllerSettings,
        input: &PlayerInput,
        grounded: bool,
        facing: Quat,
        clock: FrameClock,
    ) -> MovementStep {
        let jump = if grounded {
            self.double_jump_available = true;
            self.leniency_deadline = Some(clock.now + settings.jump_time_leniency);
            self.velocity = horizontal_velocity(input.move_axes, facing, settings.move_speed);

            input.jump.then_some(JumpKind::Ground)
        } else if input.jump {
            // В воздухе горизонтальная скорость сохраняется с последнего grounded кадра
            self.airborne_jump(clock.now)
        } else {
            None
        };

        if jump.is_some() {
            self.velocity.y = settings.jump_power;
            self.leniency_deadline = None;
        }

        self.velocity.y -= settings.gravity * clock.delta;

        if grounded && self.velocity.y < 0.0 {
            self.velocity.y = GROUNDED_REST_VELOCITY;
        }

        MovementStep {
            velocity: self.velocity,
            displacement: self.velocity * clock.delta,
            yaw_delta: yaw_delta(input.look_axis, settings.look_speed, clock.delta)
                + pending_yaw(input.look_pending, settings.look_speed),
            jump,
        }
    }

    /// Открыто ли окно leniency на момент `now`
    pub fn within_leniency(&self, now: f32) -> bool {
        self.leniency_deadline.is_some_and(|deadline| now < deadline)
    }

    fn airborne_jump(&mut self, now: f32) -> Option<JumpKind> {
        if self.within_leniency(now) {
            Some(JumpKind::Leniency)
        } else if self.double_jump_available {
            self.double_jump_available = false;
            Some(JumpKind::Double)
        } else {
            None
        }
    }
}

/// Горизонтальная скорость из move axes в локальном frame тела
///
/// Local forward = -Z, поэтому `move_axes.y` (forward +) идёт в -Z.
pub fn horizontal_velocity(move_axes: Vec2, facing: Quat, move_speed: f32) -> Vec3 {
    let local = Vec3::new(move_axes.x, 0.0, -move_axes.y);
    let world = facing * local * move_speed;
    Vec3::new(world.x, 0.0, world.z)
}

/// Yaw delta в радианах; `look_speed` задаётся в градусах/сек
pub fn yaw_delta(look_axis: f32, look_speed: f32, delta: f32) -> f32 {
    (look_axis * look_speed * delta).to_radians()
}

/// Yaw от накопленного look (axis · сек), не зависит от длины тика
pub fn pending_yaw(look_pending: f32, look_speed: f32) -> f32 {
    (look_pending * look_speed).to_radians()
}

/// Поворот только по мировой Y: pitch/roll тела не трогаем
pub fn apply_yaw(transform: &mut Transform, yaw_delta: f32) {
    if yaw_delta != 0.0 {
        transform.rotate_y(yaw_delta);
    }
}

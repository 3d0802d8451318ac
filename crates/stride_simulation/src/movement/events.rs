//! Movement events

use bevy::prelude::*;

use crate::components::JumpKind;

/// Event: игрок прыгнул в этом тике
///
/// Генерируется: `update_player_movement`
/// Обрабатывается: клиент (звук/анимация), тесты
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlayerJumped {
    pub entity: Entity,
    pub kind: JumpKind,
}

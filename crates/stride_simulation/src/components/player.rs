//! Player control marker components

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Movement systems используют `With<Player>` filter: в симуляции ровно один
/// управляемый персонаж, NPC здесь нет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Контроллер выключен: при setup не нашлось collision компонента
///
/// Ставится один раз в `validate_character_controllers`, дальше entity
/// игнорируется всеми movement системами. Восстановления нет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ControllerDisabled;

//! Lives (health collaborator) и объекты, скрываемые после смерти

use bevy::prelude::*;

/// Количество жизней игрока
///
/// `current` может уйти в минус — мёртвым считается всё, что ≤ 0.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(LifeStatus)]
pub struct Lives {
    pub current: i32,
    pub max: i32,
}

impl Default for Lives {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Lives {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn lose_life(&mut self) {
        self.current -= 1;
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

/// Последнее наблюдённое состояние жизни (для событий на переходах)
///
/// `None` — владелец ещё не прошёл ни одного тика. Живёт на самом владельце
/// и уходит вместе с ним при despawn.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct LifeStatus {
    pub last_alive: Option<bool>,
}

/// Entities, которые прячутся пока игрок мёртв (оружие, HUD маркеры и т.п.)
#[derive(Component, Debug, Clone, Default)]
pub struct DisableWhileDead(pub Vec<Entity>);

/// Active/inactive флаг вспомогательного объекта
///
/// Симуляция headless и про `Visibility` не знает: клиент маппит флаг
/// в видимость (см. `stride_client::rendering`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Self(true)
    }
}

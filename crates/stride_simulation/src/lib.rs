//! Stride Simulation Core
//!
//! ECS-симуляция player controller'а на Bevy 0.16
//!
//! Слои:
//! - movement: чистый тик (ground/air движение, прыжки, gravity, yaw)
//! - physics: capsule collider + Rapier KinematicCharacterController (collision collaborator)
//! - lives: health collaborator + объекты, скрываемые после смерти
//! - input: источники PlayerInput (scripted бот для headless)
//!
//! Клавиатура/мышь/рендер живут в `stride_client`.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod config;
pub mod input;
pub mod lives;
pub mod logger;
pub mod movement;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, PlayerControllerSettings};
pub use input::{drive_scripted_input, ScriptedInput};
pub use lives::LifeStateChanged;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{ControllerSet, FrameClock, MovementStep, PlayerControllerPlugin, PlayerJumped};
pub use physics::{
    spawn_player, HeadlessPhysicsPlugin, RapierCharacterPlugin, CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS,
    STANDING_HEIGHT,
};

/// Частота simulation tick
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins(PlayerControllerPlugin)
            .add_systems(
                FixedUpdate,
                drive_scripted_input.in_set(ControllerSet::Input),
            );

        // Детерминистичный RNG (seed по умолчанию, headless app ставит свой)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время виртуальное: каждый `app.update()` продвигает часы ровно на один
/// fixed tick, поэтому число тиков не зависит от wall clock.
/// Коллизии — `HeadlessPhysicsPlugin` (пол y = 0), Rapier не подключается.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )))
        .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

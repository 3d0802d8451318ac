//! Тесты детерминизма
//!
//! Scripted бот + одинаковый seed → идентичная траектория игрока

use bevy::prelude::*;
use stride_simulation::{
    create_headless_app, spawn_player, world_snapshot, Lives, MovementState,
    PlayerControllerSettings, ScriptedInput, STANDING_HEIGHT,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    let (state1, transform1) = run_simulation(SEED, TICK_COUNT);
    let (state2, transform2) = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        state1, state2,
        "Симуляция с одинаковым seed ({}) дала разные MovementState!",
        SEED
    );
    assert_eq!(transform1, transform2, "Траектории разошлись (seed {})", SEED);
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 300;

    // Запускаем 3 раза — все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let (_, transform_a) = run_simulation(1, 300);
    let (_, transform_b) = run_simulation(2, 300);

    assert_ne!(transform_a, transform_b, "Разные seed должны давать разный input");
}

/// Запускает симуляцию и возвращает snapshot игрока
fn run_simulation(seed: u64, tick_count: usize) -> (Vec<u8>, Vec<u8>) {
    let mut app = create_headless_app(seed);

    let world = app.world_mut();
    {
        let mut commands = world.commands();
        let player = spawn_player(
            &mut commands,
            Vec3::new(0.0, STANDING_HEIGHT, 0.0),
            PlayerControllerSettings::default(),
            Lives::default(),
            Vec::new(),
        );
        commands.entity(player).insert(ScriptedInput::default());
    }
    world.flush();

    for _ in 0..tick_count {
        app.update();
    }

    (
        world_snapshot::<MovementState>(app.world_mut()),
        world_snapshot::<Transform>(app.world_mut()),
    )
}

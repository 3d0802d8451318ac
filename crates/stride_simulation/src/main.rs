//! Headless симуляция Stride
//!
//! Запускает Bevy App без рендера: scripted бот гоняет player controller по полу.

use bevy::prelude::*;
use stride_simulation::{
    create_headless_app, log_info, spawn_player, Lives, MovementState, PlayerControllerSettings,
    PlayerJumped, ScriptedInput, STANDING_HEIGHT,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Stride headless simulation (seed: {})", seed));

    let world = app.world_mut();
    let marker = world.spawn_empty().id();
    let player = {
        let mut commands = world.commands();
        let player = spawn_player(
            &mut commands,
            Vec3::new(0.0, STANDING_HEIGHT, 0.0),
            PlayerControllerSettings::default(),
            Lives::default(),
            vec![marker],
        );
        commands.entity(player).insert(ScriptedInput::default());
        player
    };
    world.flush();

    let mut jumps = 0usize;

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        jumps += app
            .world_mut()
            .resource_mut::<Events<PlayerJumped>>()
            .drain()
            .count();

        if tick % 100 == 0 {
            let world = app.world();
            if let (Some(transform), Some(state)) = (
                world.get::<Transform>(player),
                world.get::<MovementState>(player),
            ) {
                log_info(&format!(
                    "Tick {}: position {:.2?}, velocity {:.2?}",
                    tick, transform.translation, state.velocity
                ));
            }
        }
    }

    log_info(&format!("Simulation complete! {} jumps", jumps));
}

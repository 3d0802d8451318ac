use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use stride_simulation::{
    init_logger, spawn_player, Lives, PlayerControllerSettings, RapierCharacterPlugin,
    SimulationPlugin, STANDING_HEIGHT,
};

mod camera;
mod input;
mod rendering;

use camera::{CameraPlugin, FollowCamera};
use input::PlayerInputPlugin;
use rendering::RenderingSyncPlugin;

const SETTINGS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/controller.ron");

fn main() {
    init_logger();
    let settings = PlayerControllerSettings::load_or_default(SETTINGS_PATH);

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stride - Player Controller".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics (collision collaborator) в том же fixed шаге, что и симуляция
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        // Simulation (headless ECS logic) + Rapier grounded sync
        .add_plugins((SimulationPlugin, RapierCharacterPlugin))
        // Input, visuals, camera
        .add_plugins((PlayerInputPlugin, RenderingSyncPlugin, CameraPlugin))
        .insert_resource(settings)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground, lights, player и follow camera
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<PlayerControllerSettings>,
) {
    // Ground plane (40x40m)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    // Статический collider пола: верхняя грань на y = 0
    commands.spawn((
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(20.0, 0.1, 20.0),
    ));

    // Пара ступенек, чтобы было откуда прыгать с края
    for (i, height) in [0.5_f32, 1.0, 1.5].into_iter().enumerate() {
        let size = Vec3::new(2.0, height, 2.0);
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(Color::srgb(0.6, 0.55, 0.5))),
            Transform::from_xyz(3.0 + i as f32 * 2.0, height / 2.0, -4.0),
            RigidBody::Fixed,
            Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        ));
    }

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Вспомогательные объекты (прячутся пока игрок мёртв)
    let marker_material = materials.add(Color::srgb(0.9, 0.7, 0.1));
    let weapon = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(0.1, 0.1, 0.6))),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_xyz(0.45, 0.1, -0.3),
            Visibility::default(),
        ))
        .id();
    let halo = commands
        .spawn((
            Mesh3d(meshes.add(Torus::new(0.15, 0.25))),
            MeshMaterial3d(marker_material),
            Transform::from_xyz(0.0, 1.1, 0.0),
            Visibility::default(),
        ))
        .id();

    let player = spawn_player(
        &mut commands,
        Vec3::new(0.0, STANDING_HEIGHT, 0.0),
        *settings,
        Lives::default(),
        vec![weapon, halo],
    );
    commands.entity(player).add_children(&[weapon, halo]);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera::new(player),
    ));
}

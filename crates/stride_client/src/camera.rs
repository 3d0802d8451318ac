use bevy::prelude::*;
use bevy::transform::TransformSystem;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            follow_target.before(TransformSystem::TransformPropagate),
        );
    }
}

/// Third-person камера за спиной игрока
#[derive(Component)]
pub struct FollowCamera {
    pub target: Entity,
    pub distance: f32,
    pub height: f32,
    /// Точка взгляда над центром капсулы
    pub look_height: f32,
}

impl FollowCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            distance: 6.0,
            height: 3.0,
            look_height: 0.8,
        }
    }
}

/// Камера повторяет yaw игрока (local +Z = за спиной)
fn follow_target(
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
    targets: Query<&Transform, Without<FollowCamera>>,
) {
    for (camera, mut transform) in cameras.iter_mut() {
        let Ok(target) = targets.get(camera.target) else {
            continue;
        };

        let offset = target.rotation * Vec3::new(0.0, camera.height, camera.distance);
        let focus = target.translation + Vec3::Y * camera.look_height;

        *transform = Transform::from_translation(target.translation + offset)
            .looking_at(focus, Vec3::Y);
    }
}

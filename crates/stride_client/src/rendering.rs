use bevy::prelude::*;
use stride_simulation::{Active, Player, CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (attach_player_visuals, sync_active_visibility).chain());
    }
}

/// Capsule mesh для только что заспавненного игрока
fn attach_player_visuals(
    mut commands: Commands,
    players: Query<Entity, Added<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for player in players.iter() {
        commands.entity(player).insert((
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_HALF_HEIGHT * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.2, 0.4, 0.9),
                ..default()
            })),
            Visibility::default(),
        ));
    }
}

/// Active флаг симуляции → Visibility (только на переходах)
fn sync_active_visibility(mut objects: Query<(&Active, &mut Visibility), Changed<Active>>) {
    for (active, mut visibility) in objects.iter_mut() {
        let target = if active.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(target);
    }
}

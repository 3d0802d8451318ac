//! Lives systems

use bevy::prelude::*;

use crate::components::{Active, DisableWhileDead, LifeStatus, Lives};
use crate::logger;

use super::events::LifeStateChanged;

/// Синхронизация вспомогательных объектов с состоянием жизни
///
/// Dead (lives ≤ 0) → все объекты из `DisableWhileDead` inactive, alive → active.
/// `set_if_neq` — change detection срабатывает только на переходах.
/// Прошлое состояние хранится в `LifeStatus` на владельце.
pub fn sync_disable_while_dead(
    mut owners: Query<(Entity, &Lives, &DisableWhileDead, &mut LifeStatus)>,
    mut objects: Query<&mut Active>,
    mut life_events: EventWriter<LifeStateChanged>,
) {
    for (entity, lives, disable_while_dead, mut status) in owners.iter_mut() {
        let alive = lives.is_alive();

        for &object in disable_while_dead.0.iter() {
            let Ok(mut active) = objects.get_mut(object) else {
                continue;
            };
            active.set_if_neq(Active(alive));
        }

        let previous = status.last_alive.replace(alive);
        if previous.is_some_and(|was_alive| was_alive != alive) {
            if alive {
                logger::log_info(&format!("Player {:?} is alive again ({} lives)", entity, lives.current));
            } else {
                logger::log_info(&format!("Player {:?} died", entity));
            }
            life_events.write(LifeStateChanged { entity, alive });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lives_app() -> App {
        let mut app = App::new();
        app.add_event::<LifeStateChanged>()
            .add_systems(Update, sync_disable_while_dead);
        app
    }

    fn drain(app: &mut App) -> Vec<LifeStateChanged> {
        app.world_mut()
            .resource_mut::<Events<LifeStateChanged>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_life_status_lives_on_owner() {
        let mut app = lives_app();
        let object = app.world_mut().spawn(Active(true)).id();
        // LifeStatus приходит как required component от Lives
        let owner = app
            .world_mut()
            .spawn((Lives::new(1), DisableWhileDead(vec![object])))
            .id();

        app.update();
        assert_eq!(
            app.world().get::<LifeStatus>(owner),
            Some(&LifeStatus { last_alive: Some(true) })
        );
        assert!(drain(&mut app).is_empty(), "first observation is not a transition");

        if let Some(mut lives) = app.world_mut().get_mut::<Lives>(owner) {
            lives.lose_life();
        }
        app.update();
        assert_eq!(drain(&mut app), vec![LifeStateChanged { entity: owner, alive: false }]);
        assert_eq!(app.world().get::<Active>(object), Some(&Active(false)));

        // Despawn владельца не оставляет состояния в системе
        app.world_mut().despawn(owner);
        app.update();
        assert!(drain(&mut app).is_empty());
        assert_eq!(app.world_mut().query::<&LifeStatus>().iter(app.world()).count(), 0);
    }
}

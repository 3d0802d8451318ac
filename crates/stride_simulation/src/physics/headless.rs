//! Headless stand-in для Rapier
//!
//! В headless App (MinimalPlugins, без RapierPhysicsPlugin) character controller
//! никто не двигает. Эта система применяет `translation` напрямую к Transform
//! и считает grounded по плоскости пола y = 0.
//!
//! Stub: никаких стен и склонов, только пол.

use bevy::prelude::*;
use bevy_rapier3d::prelude::KinematicCharacterController;

use crate::components::{Grounded, Player};

use super::character::STANDING_HEIGHT;

/// Допуск для ground check (numerical errors)
const GROUND_EPSILON: f32 = 1e-3;

/// Применить displacement к Transform и обновить grounded
///
/// `translation` забирается (take), как это делает Rapier после move.
pub fn integrate_headless_motion(
    mut bodies: Query<
        (&mut Transform, &mut KinematicCharacterController, &mut Grounded),
        With<Player>,
    >,
) {
    for (mut transform, mut controller, mut grounded) in bodies.iter_mut() {
        if let Some(displacement) = controller.translation.take() {
            transform.translation += displacement;
        }

        let on_ground = transform.translation.y <= STANDING_HEIGHT + GROUND_EPSILON;
        if on_ground {
            transform.translation.y = STANDING_HEIGHT;
        }
        grounded.set_if_neq(Grounded(on_ground));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_ground_clamp_logic() {
        // Та же логика, что в системе, без App schedule
        let mut transform = Transform::from_xyz(0.0, STANDING_HEIGHT, 0.0);
        transform.translation += Vec3::new(0.0, -0.005, 0.0);

        let on_ground = transform.translation.y <= STANDING_HEIGHT + GROUND_EPSILON;
        assert!(on_ground);

        transform.translation.y = STANDING_HEIGHT + 0.2;
        let on_ground = transform.translation.y <= STANDING_HEIGHT + GROUND_EPSILON;
        assert!(!on_ground);
    }
}

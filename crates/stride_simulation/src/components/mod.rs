//! ECS Components для player controller
//!
//! Организация по доменам:
//! - player: маркеры (Player, ControllerDisabled)
//! - movement: input, grounded, состояние прыжков (PlayerInput, Grounded, MovementState)
//! - lives: health collaborator и скрываемые объекты (Lives, DisableWhileDead)

pub mod lives;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use lives::*;
pub use movement::*;
pub use player::*;

//! Lives domain — health collaborator и объекты, скрываемые после смерти
//!
//! Содержит:
//! - sync_disable_while_dead (active флаги на объектах из DisableWhileDead)
//! - LifeStateChanged (event на переходах alive ↔ dead)

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

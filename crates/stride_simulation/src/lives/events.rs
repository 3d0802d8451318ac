//! Lives events

use bevy::prelude::*;

/// Event: игрок умер (`alive: false`) или снова жив (`alive: true`)
///
/// Пишется только на переходах, не каждый тик.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeStateChanged {
    pub entity: Entity,
    pub alive: bool,
}

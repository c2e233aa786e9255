//! Minion events (observability для animation / UI / тестов)

use bevy::prelude::*;

use super::components::MinionMode;

/// Event: режим minion сменился
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MinionModeChanged {
    pub minion: Entity,
    pub from: MinionMode,
    pub to: MinionMode,
}

/// Event: Charge прерван контактом с препятствием
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ChargeInterrupted {
    pub minion: Entity,
    pub obstacle: Entity,
}

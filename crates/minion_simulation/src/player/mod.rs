//! Player domain: PlayerAgent
//!
//! Leaf компонент: Move input → velocity + ориентация игрока, публикует `speed`.
//! От minion не зависит; minion читает PlayerAgent только через `speed()`.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod components;
pub mod movement;
pub mod spawn;


pub use components::*;
pub use movement::*;
pub use spawn::*;

/// Player Plugin: player_movement первым в fixed tick (happens-before для minion)
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlayerAgent>().add_systems(
            FixedUpdate,
            player_movement.in_set(SimulationSet::Player),
        );
    }
}

//! Minion domain: MinionAgent
//!
//! FSM из пяти режимов (Follow, DirectionalSweep, PointerSweep, Charge, ReturnDelay).
//! Режим пересчитывается каждый tick с нуля; между tick живут только
//! флаги `MinionState` и return-delay countdown.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use crate::SimulationSet;

pub mod arbitration;
pub mod behaviours;
pub mod components;
pub mod events;
pub mod spawn;
pub mod systems;

pub use arbitration::{select_mode, ModeInputs};
pub use components::*;
pub use events::*;
pub use spawn::*;
pub use systems::*;

/// Minion Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. minion_collision_interrupts: контакты прошлого physics step
/// 2. minion_tick: арбитраж + исполнение режима
/// 3. advance_return_delay: countdown (конец tick)
pub struct MinionPlugin;

impl Plugin for MinionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MinionModeChanged>()
            .add_event::<ChargeInterrupted>()
            // Rapier регистрирует сам, если подключён; add_event идемпотентен
            .add_event::<CollisionEvent>()
            .register_type::<MinionState>()
            .register_type::<MinionAgent>()
            .add_systems(
                FixedUpdate,
                (
                    minion_collision_interrupts.in_set(SimulationSet::Contacts),
                    minion_tick.in_set(SimulationSet::Minion),
                    advance_return_delay.in_set(SimulationSet::Cooldown),
                ),
            );
    }
}

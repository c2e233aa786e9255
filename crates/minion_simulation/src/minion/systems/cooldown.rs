//! Return-delay countdown (конец tick)

use bevy::prelude::*;

use crate::minion::components::MinionState;

/// Система: tick return-delay timer
///
/// Идёт после `minion_tick`: cooldown, стартовавший в tick N, покрывает
/// ровно `return_delay / dt` tick начиная с N.
pub fn advance_return_delay(mut minions: Query<(Entity, &mut MinionState)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (entity, mut state) in minions.iter_mut() {
        if !state.return_delay.is_running() {
            continue;
        }
        if state.return_delay.tick(delta) {
            crate::log(&format!("Minion {:?}: ReturnDelay expired", entity));
        }
    }
}

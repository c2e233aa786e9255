//! Mode arbitration: какой режим владеет velocity minion в этом tick
//!
//! Строгий приоритет (первое совпадение):
//! 1. DirectionalSweep: Sweep active
//! 2. PointerSweep: Send active && Recall active
//! 3. Charge: Send pressed, или latched Charge без cooldown
//! 4. Follow-or-Return: всё остальное (см. `MinionState::enter_default_branch`)

use crate::config::ChargeLatch;
use crate::input::{InputActionMap, MinionBindings};

use super::components::{MinionMode, MinionState};

/// Снимок bindings minion за tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeInputs {
    pub sweep_active: bool,
    pub send_active: bool,
    pub send_pressed: bool,
    pub recall_active: bool,
}

impl ModeInputs {
    pub fn read(actions: &InputActionMap, bindings: &MinionBindings) -> Self {
        Self {
            sweep_active: actions.is_active(bindings.sweep),
            send_active: actions.is_active(bindings.send),
            send_pressed: actions.is_pressed(bindings.send),
            recall_active: actions.is_active(bindings.recall),
        }
    }
}

/// Charge predicate
///
/// `awaiting_send_release` гасит только удержание Send (после удара о стену),
/// latch к этому моменту уже сброшен.
pub fn charge_requested(inputs: &ModeInputs, state: &MinionState, latch: ChargeLatch) -> bool {
    let fresh_send = inputs.send_pressed && !state.awaiting_send_release;
    match latch {
        ChargeLatch::Latched => fresh_send || (state.is_sending && !state.is_in_cooldown()),
        ChargeLatch::RequireSend => fresh_send,
    }
}

/// Выбор режима. Follow здесь означает default ветку: ReturnDelay
/// решается уже внутри неё (нужен старт timer).
pub fn select_mode(inputs: &ModeInputs, state: &MinionState, latch: ChargeLatch) -> MinionMode {
    if inputs.sweep_active {
        MinionMode::DirectionalSweep
    } else if inputs.send_active && inputs.recall_active {
        MinionMode::PointerSweep
    } else if charge_requested(inputs, state, latch) {
        MinionMode::Charge
    } else {
        MinionMode::Follow
    }
}

/// Снимает блок Send после отпускания кнопки
pub fn release_send_block(inputs: &ModeInputs, state: &mut MinionState) {
    if state.awaiting_send_release && !inputs.send_pressed {
        state.awaiting_send_release = false;
    }
}

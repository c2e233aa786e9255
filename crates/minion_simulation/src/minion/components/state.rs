//! Minion FSM state: режим, флаги между tick и return-delay countdown.

use bevy::prelude::*;

/// Допуск для float countdown (0.5 - 25 × 0.02 в f32 не ровно 0)
pub const TIMER_EPSILON: f32 = 1e-4;

/// Режим minion за tick (ровно один исполняется)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum MinionMode {
    /// Следование за игроком / возврат к home point
    #[default]
    Follow,
    /// Sweep vector binding управляет направлением
    DirectionalSweep,
    /// Send + Recall: движение к точке курсора на земле
    PointerSweep,
    /// Неуправляемый рывок вперёд до препятствия
    Charge,
    /// Cooldown после directed режима: стоим на месте
    ReturnDelay,
}

impl MinionMode {
    pub fn is_sweep(&self) -> bool {
        matches!(self, MinionMode::DirectionalSweep | MinionMode::PointerSweep)
    }
}

/// One-shot countdown для ReturnDelay
///
/// Без coroutine: остаток уменьшается раз в tick (`tick`), старт во время
/// работы игнорируется (не продлевает и не сбрасывает).
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ReturnDelayTimer {
    remaining: f32,
}

impl ReturnDelayTimer {
    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Запуск countdown. false если уже идёт или duration нулевая.
    pub fn start(&mut self, duration: f32) -> bool {
        if self.is_running() || duration <= TIMER_EPSILON {
            return false;
        }
        self.remaining = duration;
        true
    }

    /// Уменьшает остаток. true ровно в tick истечения.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining -= delta;
        if self.remaining <= TIMER_EPSILON {
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

/// Состояние FSM minion
///
/// Режим пересчитывается каждый tick; между tick живут только флаги и timer.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MinionState {
    /// Режим последнего tick
    pub mode: MinionMode,
    /// Предыдущий tick был sweep (детект края sweep → не-sweep)
    pub was_sweeping: bool,
    /// Charge активен (держит Charge без Send)
    pub is_sending: bool,
    /// После прерывания Charge удержание Send не перезапускает его до отпускания
    pub awaiting_send_release: bool,
    pub return_delay: ReturnDelayTimer,
}

impl MinionState {
    pub fn is_in_cooldown(&self) -> bool {
        self.return_delay.is_running()
    }

    pub fn mark_sweeping(&mut self) {
        self.was_sweeping = true;
    }

    pub fn mark_sending(&mut self) {
        self.is_sending = true;
    }

    /// Default ветка (Follow-or-Return)
    ///
    /// Край sweep → не-sweep запускает cooldown (один раз), затем флаги сбрасываются.
    /// Возвращает ReturnDelay пока cooldown идёт, иначе Follow.
    pub fn enter_default_branch(&mut self, return_delay: f32) -> MinionMode {
        if self.was_sweeping && self.return_delay.start(return_delay) {
            crate::log(&format!("Minion: sweep ended → ReturnDelay ({:.2}s)", return_delay));
        }
        self.was_sweeping = false;
        self.is_sending = false;

        if self.is_in_cooldown() {
            MinionMode::ReturnDelay
        } else {
            MinionMode::Follow
        }
    }

    /// Контакт с препятствием во время Charge
    pub fn interrupt_charge(&mut self, return_delay: f32) {
        self.is_sending = false;
        self.awaiting_send_release = true;
        self.return_delay.start(return_delay);
    }
}

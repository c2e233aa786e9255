//! Named input actions (bindings)

use bevy::prelude::*;

use crate::error::SimulationError;

/// Имена bindings, которые использует симуляция
pub const MOVE_ACTION: &str = "Move";
pub const SWEEP_ACTION: &str = "Sweep";
pub const SEND_ACTION: &str = "Send";
pub const RECALL_ACTION: &str = "Recall";

/// Handle на action внутри `InputActionMap` (резолвится один раз при spawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct ActionId(usize);

/// Состояние одного action за текущий tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ActionState {
    /// Action "in progress" (аналог не в idle / кнопка в процессе)
    pub active: bool,
    /// Кнопка зажата
    pub pressed: bool,
    /// Edge: нажата в этом tick
    pub just_triggered: bool,
    /// Analog 2D значение (у кнопок ZERO)
    pub value: Vec2,
}

impl ActionState {
    /// Зажатая кнопка
    pub fn held() -> Self {
        Self {
            active: true,
            pressed: true,
            just_triggered: false,
            value: Vec2::ZERO,
        }
    }

    /// Analog stick с ненулевым значением
    pub fn axis(value: Vec2) -> Self {
        Self {
            active: value != Vec2::ZERO,
            pressed: false,
            just_triggered: false,
            value,
        }
    }
}

/// Registry именованных actions
///
/// Порядок регистрации фиксирован → ActionId стабильны на всю сессию.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputActionMap {
    names: Vec<String>,
    states: Vec<ActionState>,
}

impl InputActionMap {
    /// Map с четырьмя стандартными bindings (Move, Sweep, Send, Recall)
    pub fn with_default_bindings() -> Self {
        Self::with_actions([MOVE_ACTION, SWEEP_ACTION, SEND_ACTION, RECALL_ACTION])
    }

    pub fn with_actions<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::default();
        for name in names {
            map.register(name);
        }
        map
    }

    /// Регистрирует action (повторная регистрация возвращает существующий id)
    pub fn register(&mut self, name: &str) -> ActionId {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            return ActionId(index);
        }
        self.names.push(name.to_string());
        self.states.push(ActionState::default());
        ActionId(self.names.len() - 1)
    }

    pub fn find_action(&self, name: &str) -> Result<ActionId, SimulationError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(ActionId)
            .ok_or_else(|| SimulationError::MissingBinding(name.to_string()))
    }

    pub fn state(&self, id: ActionId) -> ActionState {
        self.states.get(id.0).copied().unwrap_or_default()
    }

    pub fn is_active(&self, id: ActionId) -> bool {
        self.state(id).active
    }

    pub fn is_pressed(&self, id: ActionId) -> bool {
        self.state(id).pressed
    }

    pub fn just_triggered(&self, id: ActionId) -> bool {
        self.state(id).just_triggered
    }

    pub fn read_vec2(&self, id: ActionId) -> Vec2 {
        self.state(id).value
    }

    /// Запись состояния (внешний input layer / тесты)
    pub fn set_state(&mut self, id: ActionId, state: ActionState) {
        if let Some(slot) = self.states.get_mut(id.0) {
            *slot = state;
        }
    }

    /// Запись по имени; false если action не зарегистрирован
    pub fn set_state_by_name(&mut self, name: &str, state: ActionState) -> bool {
        match self.find_action(name) {
            Ok(id) => {
                self.set_state(id, state);
                true
            }
            Err(_) => false,
        }
    }

    /// Отпустить все actions
    pub fn release_all(&mut self) {
        for state in self.states.iter_mut() {
            *state = ActionState::default();
        }
    }

    /// Сброс edge флагов (после tick)
    pub fn clear_edges(&mut self) {
        for state in self.states.iter_mut() {
            state.just_triggered = false;
        }
    }
}

/// Система: сбрасывает just_triggered в конце fixed tick
pub fn clear_input_edges(mut actions: ResMut<InputActionMap>) {
    actions.clear_edges();
}

/// Bindings игрока (резолвятся при spawn)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerBindings {
    pub movement: ActionId,
}

impl PlayerBindings {
    pub fn resolve(actions: &InputActionMap) -> Result<Self, SimulationError> {
        Ok(Self {
            movement: actions.find_action(MOVE_ACTION)?,
        })
    }
}

/// Bindings minion (Sweep vector, Send / Recall кнопки)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MinionBindings {
    pub sweep: ActionId,
    pub send: ActionId,
    pub recall: ActionId,
}

impl MinionBindings {
    pub fn resolve(actions: &InputActionMap) -> Result<Self, SimulationError> {
        Ok(Self {
            sweep: actions.find_action(SWEEP_ACTION)?,
            send: actions.find_action(SEND_ACTION)?,
            recall: actions.find_action(RECALL_ACTION)?,
        })
    }
}

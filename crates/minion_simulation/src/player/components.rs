//! Player компоненты

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// В single-player режиме ровно один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Опубликованное состояние игрока
///
/// Пишется только `player_movement` (раз в tick, до minion систем).
/// Остальные читают через `speed()`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerAgent {
    speed: f32,
}

impl PlayerAgent {
    /// Модуль velocity за последний tick (m/s)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }

    pub(crate) fn record_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

/// Камера, относительно которой игрок двигается (MovementFrame::CameraRelative)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCamera(pub Entity);

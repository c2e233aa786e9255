//! Конфигурация агентов (статические константы на entity)
//!
//! PlayerConfig / MinionConfig: компоненты, задаются при spawn.
//! SimulationSettings: JSON обёртка для headless запуска.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimulationError;

/// Система координат для Move input игрока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum MovementFrame {
    /// Input x → +X, input y → forward (-Z)
    #[default]
    World,
    /// Input проецируется на flattened forward/right оси камеры
    CameraRelative,
}

/// Какое значение писать в "Speed" во время DirectionalSweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum SweepAnimationPolicy {
    /// Всегда `moving_anim_speed`
    #[default]
    Constant,
    /// Модуль фактической velocity
    Magnitude,
}

/// Что удерживает Charge после отпускания Send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum ChargeLatch {
    /// `is_sending && !cooldown` продолжает Charge без Send (неуправляемый рывок до стены)
    #[default]
    Latched,
    /// Charge только пока Send зажат
    RequireSend,
}

/// Параметры игрока
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerConfig {
    /// Максимальная скорость (m/s)
    pub move_speed: f32,
    /// Коэффициент экспоненциального поворота (slerp factor = dt * turn_rate)
    pub turn_rate: f32,
    pub movement_frame: MovementFrame,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_rate: 10.0,
            movement_frame: MovementFrame::World,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("player.move_speed", self.move_speed)?;
        require_positive("player.turn_rate", self.turn_rate)?;
        Ok(())
    }
}

/// Параметры minion
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct MinionConfig {
    /// Максимальная скорость во всех режимах (m/s)
    pub move_speed: f32,
    /// Дистанция позади игрока в Follow
    pub follow_range: f32,
    /// Длительность cooldown после directed режима (секунды)
    pub return_delay: f32,
    pub turn_rate: f32,
    /// Значение "Speed" для "moving"
    pub moving_anim_speed: f32,
    /// Дистанция до home point, ниже которой minion считается прибывшим
    pub arrive_threshold: f32,
    pub sweep_animation: SweepAnimationPolicy,
    pub charge_latch: ChargeLatch,
    /// Категория коллизии, прерывающая Charge
    pub obstacle_category: String,
}

impl Default for MinionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            follow_range: 5.0,
            return_delay: 0.5,
            turn_rate: 10.0,
            moving_anim_speed: 1.0,
            arrive_threshold: 0.1,
            sweep_animation: SweepAnimationPolicy::Constant,
            charge_latch: ChargeLatch::Latched,
            obstacle_category: "Wall".to_string(),
        }
    }
}

impl MinionConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("minion.move_speed", self.move_speed)?;
        require_positive("minion.turn_rate", self.turn_rate)?;
        require_non_negative("minion.follow_range", self.follow_range)?;
        require_non_negative("minion.return_delay", self.return_delay)?;
        require_non_negative("minion.moving_anim_speed", self.moving_anim_speed)?;
        require_non_negative("minion.arrive_threshold", self.arrive_threshold)?;
        if self.obstacle_category.trim().is_empty() {
            return Err(SimulationError::InvalidConfig {
                field: "minion.obstacle_category",
                value: format!("{:?}", self.obstacle_category),
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

/// Settings для headless запуска (JSON)
///
/// ```json
/// { "fixed_hz": 50.0, "home_point": [0.0, 0.0, 2.0],
///   "minion": { "return_delay": 0.75, "sweep_animation": "Magnitude" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    pub home_point: [f32; 3],
    pub player: PlayerConfig,
    pub minion: MinionConfig,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            fixed_hz: 50.0,
            home_point: [0.0, 0.0, 0.0],
            player: PlayerConfig::default(),
            minion: MinionConfig::default(),
        }
    }
}

impl SimulationSettings {
    pub fn from_json_str(source: &str) -> Result<Self, SimulationError> {
        let settings: Self = serde_json::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.fixed_hz.is_finite() && self.fixed_hz > 0.0) {
            return Err(SimulationError::InvalidConfig {
                field: "fixed_hz",
                value: self.fixed_hz.to_string(),
                reason: "must be a positive tick rate",
            });
        }
        self.player.validate()?;
        self.minion.validate()
    }

    pub fn home_point(&self) -> Vec3 {
        Vec3::from_array(self.home_point)
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig {
            field,
            value: value.to_string(),
            reason: "must be positive",
        })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig {
            field,
            value: value.to_string(),
            reason: "must be zero or positive",
        })
    }
}

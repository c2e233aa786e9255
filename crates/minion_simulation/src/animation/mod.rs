//! Animation sink
//!
//! Playback живёт снаружи (animator читает параметры после tick).
//! Симуляция только пишет именованные float параметры.

use bevy::prelude::*;
use std::collections::HashMap;

/// Параметр скорости движения (blend idle ↔ run)
pub const SPEED_PARAM: &str = "Speed";

/// Именованные float параметры animator
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorParameters {
    floats: HashMap<String, f32>,
}

impl AnimatorParameters {
    pub fn set_float(&mut self, name: &str, value: f32) {
        match self.floats.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.floats.insert(name.to_string(), value);
            }
        }
    }

    /// Последнее записанное значение (None если параметр ни разу не писали)
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    /// Shortcut для SPEED_PARAM (0.0 пока не записан)
    pub fn speed(&self) -> f32 {
        self.float(SPEED_PARAM).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_float_overwrites() {
        let mut params = AnimatorParameters::default();
        assert_eq!(params.float(SPEED_PARAM), None);
        assert_eq!(params.speed(), 0.0);

        params.set_float(SPEED_PARAM, 1.0);
        params.set_float(SPEED_PARAM, 0.25);

        assert_eq!(params.speed(), 0.25);
    }
}

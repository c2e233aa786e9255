//! Ошибки конфигурации симуляции
//!
//! Runtime деградации (нет пересечения луча, нулевое направление, чужая категория
//! коллизии) это политика, не ошибки. Сюда попадает только то, без чего loop
//! не может стартовать.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Input binding не найден в `InputActionMap` (fail fast при spawn)
    #[error("input binding `{0}` is not registered")]
    MissingBinding(String),

    /// Значение конфигурации вне допустимого диапазона
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Settings JSON не распарсился
    #[error("failed to parse simulation settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("failed to read simulation settings: {0}")]
    SettingsIo(#[from] std::io::Error),
}
